// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart controller.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;
use kurbo::Size;
use orgchart_connectors::{Connector, compute_connectors};
use orgchart_hierarchy::{
    DepartmentFilter, DepartmentStats, Employee, ExpansionMode, ExpansionState, Hierarchy,
    department_stats, departments, filter_by_department, find_root, manager_of, stats_for,
};
use orgchart_registry::{
    ContainerMetrics, Damage, MeasureScheduler, Measurable, Registry, Schedule, Subscription,
    Triggers,
};

use crate::config::ChartConfig;
use crate::surface::{self, CardView};
use crate::tree::ViewTree;

/// Registry changes made by [`OrgChart::sync_mounts`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountDiff {
    /// Ids registered by this call, in depth-first order.
    pub mounted: Vec<String>,
    /// Ids unregistered by this call.
    pub unmounted: Vec<String>,
    /// Scheduling outcome, `None` when nothing changed.
    pub schedule: Option<Schedule>,
}

impl MountDiff {
    /// Returns `true` if the registry was left untouched.
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty()
    }
}

/// Summary of one measurement pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Everything that asked for this pass.
    pub triggers: Triggers,
    /// Boxes that moved, appeared, or disappeared.
    pub damage: Damage,
    /// Number of connector segments after the pass.
    pub connector_count: usize,
}

/// An interactive org chart.
///
/// Owns the employee list, the department selection, the expansion state,
/// the registry of mounted card elements, and the connectors derived from
/// their boxes. The host drives it:
///
/// 1. after any state change, call [`sync_mounts`](Self::sync_mounts) with a
///    function that creates a card element for an employee;
/// 2. whenever a call hands back [`Schedule::RequestFrame`], request a frame
///    callback, and in it call [`on_frame`](Self::on_frame) with the
///    container's current metrics;
/// 3. draw [`cards`](Self::cards) and [`render_overlay`](Self::render_overlay).
#[derive(Debug)]
pub struct OrgChart<E> {
    employees: Vec<Employee>,
    selection: DepartmentFilter,
    filtered: Vec<Employee>,
    expansion: ExpansionState,
    registry: Registry<E>,
    scheduler: MeasureScheduler,
    connectors: Vec<Connector>,
    config: ChartConfig,
}

impl<E: Measurable> OrgChart<E> {
    /// Create a chart over `employees`, showing every department.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self::with_config(employees, ChartConfig::default())
    }

    /// Create a chart with explicit configuration.
    pub fn with_config(employees: Vec<Employee>, config: ChartConfig) -> Self {
        let mut chart = Self {
            employees,
            selection: DepartmentFilter::All,
            filtered: Vec::new(),
            expansion: ExpansionState::new(),
            registry: Registry::new(),
            scheduler: MeasureScheduler::new(),
            connectors: Vec::new(),
            config,
        };
        chart.apply_selection();
        chart
    }

    /// Show only `filter`'s department (plus the chain up to its roots).
    ///
    /// Reseeds the expansion state, discarding manual toggles, and returns
    /// the scheduling outcome of the `FILTER` trigger. Returns `None` and
    /// changes nothing if `filter` is already selected.
    pub fn select_department(&mut self, filter: impl Into<DepartmentFilter>) -> Option<Schedule> {
        let filter = filter.into();
        if filter == self.selection {
            return None;
        }
        self.selection = filter;
        self.apply_selection();
        Some(self.scheduler.request(Triggers::FILTER))
    }

    /// Flip whether `id`'s reports are shown.
    ///
    /// Returns the new state and the scheduling outcome of the `EXPANSION`
    /// trigger.
    pub fn toggle(&mut self, id: &str) -> (bool, Schedule) {
        let open = self.expansion.toggle(id);
        (open, self.scheduler.request(Triggers::EXPANSION))
    }

    /// Bring the registry in line with the visible tree.
    ///
    /// Hidden cards are unregistered; newly visible ones are created with
    /// `mount` and registered. Any change schedules a measurement pass.
    pub fn sync_mounts(&mut self, mut mount: impl FnMut(&Employee) -> E) -> MountDiff {
        let hierarchy = Hierarchy::new(&self.filtered);
        let anchor = anchor_in(&self.employees, &self.filtered);
        let tree = ViewTree::build(&hierarchy, anchor, &self.expansion);
        let visible: HashSet<&str> = tree.ids().collect();

        let mut diff = MountDiff {
            unmounted: self
                .registry
                .ids()
                .filter(|id| !visible.contains(id))
                .map(String::from)
                .collect(),
            ..MountDiff::default()
        };
        for id in &diff.unmounted {
            self.registry.unregister(id);
        }
        for (node, _) in tree.iter() {
            let Some(employee) = tree.employee(node) else {
                continue;
            };
            if !self.registry.contains(&employee.id) {
                self.registry.register(employee.id.as_str(), mount(employee));
                diff.mounted.push(employee.id.clone());
            }
        }
        if !diff.is_empty() {
            diff.schedule = Some(self.scheduler.request(Triggers::MOUNT));
        }
        tracing::trace!(
            mounted = diff.mounted.len(),
            unmounted = diff.unmounted.len(),
            "synced mounts"
        );
        diff
    }

    /// Replace the element of an already mounted card.
    ///
    /// Returns `None` if `id` is not mounted.
    pub fn remount(&mut self, id: &str, element: E) -> Option<Schedule> {
        if !self.registry.contains(id) {
            return None;
        }
        self.registry.register(id, element);
        Some(self.scheduler.request(Triggers::MOUNT))
    }

    /// Ask for a measurement pass on the next frame.
    pub fn request_measure(&mut self, trigger: Triggers) -> Schedule {
        self.scheduler.request(trigger)
    }

    /// Forward a scroll or resize notification from an
    /// [`ObserverScope`](orgchart_registry::ObserverScope) listener.
    pub fn notify(&mut self, subscription: Subscription) -> Schedule {
        self.scheduler.request(subscription.trigger())
    }

    /// Run the pending measurement pass, if any.
    ///
    /// Measures every mounted card relative to `container` and recomputes
    /// the connectors. Returns `None` when no pass was requested.
    pub fn on_frame(&mut self, container: &ContainerMetrics) -> Option<FrameReport> {
        let triggers = self.scheduler.take_frame()?;
        let damage = self.registry.measure(container);
        self.connectors = compute_connectors(&self.filtered, &self.registry, &self.config.connector);
        tracing::debug!(
            ?triggers,
            connectors = self.connectors.len(),
            "measured chart"
        );
        Some(FrameReport {
            triggers,
            damage,
            connector_count: self.connectors.len(),
        })
    }
}

impl<E> OrgChart<E> {
    /// The top of the filtered forest.
    pub fn center_id(&self) -> Option<&str> {
        find_root(&self.filtered).map(|e| e.id.as_str())
    }

    /// The card the rendered tree starts from.
    ///
    /// The center's manager when it is part of the filtered list, the center
    /// otherwise.
    pub fn anchor_id(&self) -> Option<&str> {
        anchor_in(&self.employees, &self.filtered)
    }

    /// The emphasized card: the center, in the unfiltered view only.
    pub fn highlight_id(&self) -> Option<&str> {
        if self.selection.is_all() {
            self.center_id()
        } else {
            None
        }
    }

    /// The visible tree for the current state.
    pub fn view_tree(&self) -> ViewTree<'_> {
        let hierarchy = Hierarchy::new(&self.filtered);
        ViewTree::build(&hierarchy, self.anchor_id(), &self.expansion)
    }

    /// View models for every visible card, in depth-first order.
    pub fn cards(&self) -> Vec<CardView<'_>> {
        surface::cards(&self.view_tree(), self.highlight_id())
    }

    /// The connector overlay as SVG markup sized to `content`.
    pub fn render_overlay(&self, content: Size) -> String {
        surface::render_overlay(&self.connectors, content, &self.config.style)
    }

    /// Returns `true` if the current selection matches nobody.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// The message to show instead of the chart, if any.
    pub fn empty_state(&self) -> Option<&'static str> {
        self.is_empty().then_some(surface::EMPTY_STATE_MESSAGE)
    }

    /// Returns `true` if exactly the visible cards are registered.
    pub fn is_registry_consistent(&self) -> bool {
        self.registry.matches_ids(self.view_tree().ids())
    }

    /// Every employee, as given.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Employees kept by the current selection.
    pub fn filtered(&self) -> &[Employee] {
        &self.filtered
    }

    /// The current department selection.
    pub fn selection(&self) -> &DepartmentFilter {
        &self.selection
    }

    /// The current expansion state.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Mounted card elements and their measured boxes.
    pub fn registry(&self) -> &Registry<E> {
        &self.registry
    }

    /// Measurement scheduling state.
    pub fn scheduler(&self) -> &MeasureScheduler {
        &self.scheduler
    }

    /// Connectors from the latest measurement pass.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Chart configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Every department name, sorted.
    pub fn departments(&self) -> Vec<&str> {
        departments(&self.employees)
    }

    /// Headcount per department, sorted by name.
    pub fn department_stats(&self) -> Vec<DepartmentStats> {
        department_stats(&self.employees)
    }

    /// Headcount of the selected department; `None` for the full view.
    pub fn selection_stats(&self) -> Option<DepartmentStats> {
        stats_for(&self.employees, &self.selection)
    }

    fn apply_selection(&mut self) {
        self.filtered = filter_by_department(&self.employees, &self.selection);
        let center = find_root(&self.filtered).map(|e| e.id.as_str());
        let manager = center.and_then(|id| manager_of(id, &self.employees));
        self.expansion = ExpansionState::seeded(
            ExpansionMode::from(&self.selection),
            center,
            manager,
            self.filtered.iter().map(|e| e.id.as_str()),
        );
        tracing::debug!(
            selection = %self.selection,
            visible = self.filtered.len(),
            open = self.expansion.len(),
            "reseeded chart"
        );
    }
}

fn anchor_in<'a>(all: &[Employee], filtered: &'a [Employee]) -> Option<&'a str> {
    let center = find_root(filtered)?;
    let anchor = manager_of(&center.id, all)
        .and_then(|manager| filtered.iter().find(|e| e.id == manager))
        .unwrap_or(center);
    Some(anchor.id.as_str())
}
