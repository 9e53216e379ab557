// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of a chart driven like a host would drive it.

use kurbo::{Rect, Size, Vec2};
use orgchart_connectors::ConnectorKind;
use orgchart_hierarchy::{Employee, filter_by_department, manager_of, reports};
use orgchart_registry::{
    ContainerMetrics, Measurable, ObserverScope, Schedule, Subscription, TriggerSource, Triggers,
};
use orgchart_view::{EMPTY_STATE_MESSAGE, OrgChart};

/// A mounted card as the host sees it: a box in viewport space.
#[derive(Clone, Debug)]
struct Card {
    rect: Rect,
}

impl Measurable for Card {
    fn client_rect(&self) -> Option<Rect> {
        Some(self.rect)
    }
}

fn team(departments: [&str; 3]) -> Vec<Employee> {
    vec![
        Employee::new("1", "Sarah", "CEO", departments[0], None),
        Employee::new("2", "Michael", "CTO", departments[1], Some("1")),
        Employee::new("3", "David", "CFO", departments[2], Some("1")),
    ]
}

/// Places cards by id: the root on top, reports side by side below.
fn slot(id: &str) -> Rect {
    match id {
        "1" => Rect::new(150.0, 0.0, 250.0, 60.0),
        "2" => Rect::new(0.0, 200.0, 100.0, 260.0),
        "3" => Rect::new(300.0, 200.0, 400.0, 260.0),
        _ => Rect::new(0.0, 400.0, 100.0, 460.0),
    }
}

fn place(e: &Employee) -> Card {
    Card { rect: slot(&e.id) }
}

/// Host window holding the chart's scroll and resize listeners.
#[derive(Debug, Default)]
struct Window {
    next: u32,
    listeners: Vec<(u32, Subscription)>,
}

impl Window {
    /// Listeners an `event` is delivered to.
    fn dispatch(&self, event: Subscription) -> Vec<Subscription> {
        self.listeners
            .iter()
            .filter(|(_, s)| *s == event)
            .map(|&(_, s)| s)
            .collect()
    }
}

impl TriggerSource for Window {
    type Handle = u32;

    fn subscribe(&mut self, subscription: Subscription) -> u32 {
        self.next += 1;
        self.listeners.push((self.next, subscription));
        self.next
    }

    fn unsubscribe(&mut self, handle: u32) {
        self.listeners.retain(|(h, _)| *h != handle);
    }
}

fn container() -> ContainerMetrics {
    ContainerMetrics::new(Rect::new(0.0, 0.0, 400.0, 300.0), Vec2::ZERO)
}

fn ids(list: &[Employee]) -> Vec<&str> {
    list.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn reports_in_list_order() {
    let list = team(["X", "X", "X"]);
    let direct: Vec<_> = reports("1", &list).map(|e| e.id.as_str()).collect();
    assert_eq!(direct, ["2", "3"]);
    assert_eq!(manager_of("2", &list), Some("1"));
}

#[test]
fn filter_keeps_ancestors_and_drops_siblings() {
    let list = team(["X", "Y", "X"]);
    let kept = filter_by_department(&list, &"Y".into());
    assert_eq!(ids(&kept), ["1", "2"]);

    let mut chart = OrgChart::new(list);
    chart.select_department("Y");
    chart.sync_mounts(place);
    chart.on_frame(&container());
    assert_eq!(chart.view_tree().ids().collect::<Vec<_>>(), ["1", "2"]);
    // One child: no merge bar.
    let kinds: Vec<_> = chart.connectors().iter().map(|c| c.kind).collect();
    assert_eq!(kinds, [ConnectorKind::ParentDrop, ConnectorKind::ChildDrop]);
}

#[test]
fn no_matches_shows_empty_state() {
    let list = team(["X", "X", "X"]);
    assert!(filter_by_department(&list, &"Z".into()).is_empty());

    let mut chart = OrgChart::new(list);
    chart.sync_mounts(place);
    chart.on_frame(&container());
    assert_eq!(chart.select_department("Z"), Some(Schedule::RequestFrame));
    assert_eq!(chart.empty_state(), Some(EMPTY_STATE_MESSAGE));

    let diff = chart.sync_mounts(place);
    assert_eq!(diff.unmounted.len(), 3);
    let report = chart.on_frame(&container()).unwrap();
    assert_eq!(report.connector_count, 0);
    assert!(chart.cards().is_empty());
    assert!(chart.registry().is_empty());
}

#[test]
fn collapse_then_expand_restores_reports() {
    let mut chart = OrgChart::new(team(["X", "X", "X"]));
    chart.sync_mounts(place);
    chart.on_frame(&container());
    assert_eq!(chart.connectors().len(), 4);

    assert_eq!(chart.toggle("1"), (false, Schedule::RequestFrame));
    let diff = chart.sync_mounts(place);
    assert_eq!(diff.unmounted.len(), 2);
    chart.on_frame(&container());
    assert!(chart.connectors().is_empty());

    assert_eq!(chart.toggle("1"), (true, Schedule::RequestFrame));
    let diff = chart.sync_mounts(place);
    assert_eq!(diff.mounted, ["2", "3"]);
    assert!(diff.unmounted.is_empty());
    chart.on_frame(&container());
    assert_eq!(chart.view_tree().ids().collect::<Vec<_>>(), ["1", "2", "3"]);
    assert_eq!(chart.connectors().len(), 4);
}

#[test]
fn resize_burst_measures_once() {
    let mut chart = OrgChart::new(team(["X", "X", "X"]));
    chart.sync_mounts(place);
    chart.on_frame(&container());
    let passes = chart.scheduler().passes();

    assert_eq!(
        chart.notify(Subscription::ContainerResize),
        Schedule::RequestFrame
    );
    for _ in 0..5 {
        assert_eq!(
            chart.notify(Subscription::ContainerResize),
            Schedule::Coalesced
        );
    }
    assert_eq!(chart.notify(Subscription::WindowResize), Schedule::Coalesced);

    let report = chart.on_frame(&container()).unwrap();
    assert_eq!(
        report.triggers,
        Triggers::CONTAINER_RESIZE | Triggers::WINDOW_RESIZE
    );
    assert!(report.damage.is_empty(), "nothing moved");
    assert!(chart.on_frame(&container()).is_none());
    assert_eq!(chart.scheduler().passes(), passes + 1);
}

#[test]
fn scrolling_moves_connectors_with_content() {
    let mut chart = OrgChart::new(team(["X", "X", "X"]));
    chart.sync_mounts(place);
    chart.on_frame(&container());
    let before: Vec<_> = chart.connectors().iter().map(|c| c.line).collect();

    // The container scrolled down by 50: cards move up on screen by 50.
    for id in ["1", "2", "3"] {
        let rect = slot(id) - Vec2::new(0.0, 50.0);
        assert!(chart.remount(id, Card { rect }).is_some());
    }
    chart.notify(Subscription::ContainerScroll);
    let scrolled = ContainerMetrics::new(container().client_rect, Vec2::new(0.0, 50.0));
    let report = chart.on_frame(&scrolled).unwrap();
    assert!(report.triggers.contains(Triggers::SCROLL));

    let after: Vec<_> = chart.connectors().iter().map(|c| c.line).collect();
    assert_eq!(before, after, "content-space geometry is scroll invariant");
}

#[test]
fn registry_matches_visible_cards_after_every_cycle() {
    let list = vec![
        Employee::new("1", "Sarah", "CEO", "Executive", None),
        Employee::new("2", "Michael", "CTO", "Technology", Some("1")),
        Employee::new("3", "Emily", "VP", "Technology", Some("2")),
        Employee::new("4", "David", "CFO", "Finance", Some("1")),
        Employee::new("5", "Lisa", "Controller", "Finance", Some("4")),
        Employee::new("6", "James", "Engineer", "Technology", Some("3")),
    ];
    let mut chart = OrgChart::new(list);
    let steps: [&dyn Fn(&mut OrgChart<Card>); 7] = [
        &|c| {
            c.toggle("2");
        },
        &|c| {
            c.toggle("3");
        },
        &|c| {
            c.select_department("Finance");
        },
        &|c| {
            c.toggle("4");
        },
        &|c| {
            c.select_department("Technology");
        },
        &|c| {
            c.select_department("all");
        },
        &|c| {
            c.toggle("1");
        },
    ];
    for step in steps {
        step(&mut chart);
        chart.sync_mounts(place);
        chart.on_frame(&container());
        assert!(chart.is_registry_consistent());
        let mut expected: Vec<_> = chart.view_tree().ids().map(String::from).collect();
        let mut registered: Vec<_> = chart.registry().ids().map(String::from).collect();
        registered.sort();
        expected.sort();
        assert_eq!(registered, expected);
    }
}

#[test]
fn overlay_is_sized_to_content() {
    let mut chart = OrgChart::new(team(["X", "X", "X"]));
    chart.sync_mounts(place);
    chart.on_frame(&container());
    let svg = chart.render_overlay(Size::new(400.0, 460.0));
    assert!(svg.contains(r#"width="400" height="460""#));
    assert_eq!(svg.matches("<polyline").count(), 4);
    assert_eq!(svg.matches("marker-end").count(), 2);
}

#[test]
fn observers_feed_the_chart_while_mounted() {
    let mut window = Window::default();
    let mut chart = OrgChart::new(team(["X", "X", "X"]));
    chart.sync_mounts(place);
    chart.on_frame(&container());

    {
        let scope = ObserverScope::attach(&mut window);
        assert_eq!(scope.len(), 3);

        let mut schedules = Vec::new();
        for event in [
            Subscription::ContainerResize,
            Subscription::ContainerResize,
            Subscription::ContainerScroll,
        ] {
            for listener in scope.source().dispatch(event) {
                schedules.push(chart.notify(listener));
            }
        }
        assert_eq!(
            schedules,
            [
                Schedule::RequestFrame,
                Schedule::Coalesced,
                Schedule::Coalesced
            ]
        );
        let report = chart.on_frame(&container()).unwrap();
        assert_eq!(report.triggers, Triggers::CONTAINER_RESIZE | Triggers::SCROLL);
    }

    // Unmounting the chart drops the scope: events no longer reach it.
    assert!(window.listeners.is_empty());
    for listener in window.dispatch(Subscription::WindowResize) {
        chart.notify(listener);
    }
    assert!(chart.on_frame(&container()).is_none());
}
