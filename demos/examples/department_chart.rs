// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A department-filterable org chart driven through a few frames.
//!
//! This example shows how a host drives `orgchart_view`:
//! - lay out the visible tree (here: a small tidy-tree layout),
//! - mount cards through `sync_mounts` and measure them in `on_frame`,
//! - draw the card view models and the SVG connector overlay.
//!
//! Run:
//! - `cargo run -p orgchart_demos --example department_chart`
//! - `RUST_LOG=debug cargo run -p orgchart_demos --example department_chart`

use std::collections::HashMap;

use kurbo::{Rect, Size, Vec2};
use orgchart_hierarchy::{Employee, validate_forest};
use orgchart_registry::{ContainerMetrics, Measurable, ObserverScope, Subscription, TriggerSource};
use orgchart_view::{OrgChart, ViewNodeId, ViewTree};
use tracing_subscriber::EnvFilter;

const CARD: Size = Size::new(160.0, 80.0);
const H_GAP: f64 = 24.0;
const V_GAP: f64 = 100.0;

/// `(id, name, role, department, manager)`
const PEOPLE: &[(&str, &str, &str, &str, Option<&str>)] = &[
    ("1", "Sarah Johnson", "CEO", "Executive", None),
    ("2", "Michael Chen", "CTO", "Technology", Some("1")),
    ("3", "Emily Davis", "VP Engineering", "Technology", Some("2")),
    ("4", "Lukas Reed", "VP of Marketing and Sales", "Marketing", Some("2")),
    ("5", "Jackie Brown", "Ops Support Manager", "Operations", Some("4")),
    ("6", "Colleen Daniels", "Assistant to CEO", "Executive", Some("1")),
    ("7", "Kelly Thompson", "Chief HR Officer", "HR", Some("1")),
    ("8", "Jane Williams", "CFO", "Finance", Some("1")),
    ("9", "Nancy Black", "Head of Legal", "Legal", Some("1")),
    ("10", "Brad Cording", "CIO", "IT", Some("1")),
    ("11", "David Wilson", "Engineering Manager", "Technology", Some("3")),
    ("12", "Sana Patel", "Engineering Manager", "Technology", Some("3")),
    ("13", "Arjun Mehta", "Senior Backend Engineer", "Technology", Some("11")),
    ("14", "Maya Verma", "Senior Frontend Engineer", "Technology", Some("11")),
    ("15", "John Smith", "Backend Developer", "Technology", Some("13")),
    ("16", "Amy Lee", "Frontend Developer", "Technology", Some("14")),
    ("17", "Zoe Carter", "Junior QA", "Technology", Some("12")),
    ("18", "Priya Nair", "Head of Product", "Product", Some("2")),
    ("19", "Carlos Gomez", "Product Manager", "Product", Some("18")),
    ("20", "Anna White", "UX Designer", "Product", Some("18")),
    ("21", "Mike Johnson", "Sales Manager", "Sales", Some("4")),
    ("37", "Alex Turner", "Senior Sales Rep", "Sales", Some("21")),
    ("38", "Sarah Miller", "Account Manager", "Sales", Some("21")),
    ("39", "David Kim", "Sales Executive", "Sales", Some("21")),
    ("40", "Emma Wilson", "Customer Success", "Sales", Some("21")),
    ("22", "Sophie Turner", "Marketing Lead", "Marketing", Some("4")),
    ("23", "Olivia Park", "Growth Marketer", "Marketing", Some("22")),
    ("24", "Ethan Brown", "Sales Executive", "Sales", Some("21")),
    ("25", "Harish Rao", "Operations Lead", "Operations", Some("5")),
    ("26", "Linda White", "QA Engineer", "Technology", Some("11")),
    ("27", "Kevin Moore", "Support Specialist", "Operations", Some("25")),
    ("28", "Rina Shah", "Customer Success Manager", "Operations", Some("25")),
    ("29", "Victor Hugo", "Accounting Manager", "Finance", Some("8")),
    ("30", "Fiona Gallagher", "Legal Counsel", "Legal", Some("9")),
    ("31", "Samir Khan", "Intern - Backend", "Technology", Some("15")),
    ("32", "Priya Sharma", "Design Intern", "Product", Some("20")),
    ("33", "Ben Turner", "Security Engineer", "IT", Some("10")),
    ("34", "Rachel Adams", "HR Generalist", "HR", Some("7")),
    ("35", "Omar Ali", "DevOps Engineer", "IT", Some("10")),
    ("36", "Natalie Gomez", "Content Strategist", "Marketing", Some("22")),
];

/// A mounted card: its box in viewport space.
#[derive(Clone, Copy, Debug)]
struct Card(Rect);

impl Measurable for Card {
    fn client_rect(&self) -> Option<Rect> {
        Some(self.0)
    }
}

/// A stand-in for the browser window: keeps the listeners the chart attaches.
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

/// Width of the subtree under `id`, cards and gaps included.
fn subtree_width(tree: &ViewTree<'_>, id: ViewNodeId) -> f64 {
    let children = tree.children_of(id);
    let below: f64 = children.iter().map(|&c| subtree_width(tree, c)).sum::<f64>()
        + H_GAP * children.len().saturating_sub(1) as f64;
    below.max(CARD.width)
}

/// Tidy layout in viewport space, with the container's top-left at `origin`.
fn layout(tree: &ViewTree<'_>, origin: Vec2) -> HashMap<String, Rect> {
    let mut boxes = HashMap::new();
    let Some(root) = tree.root() else {
        return boxes;
    };
    let mut stack = vec![(root, 0.0)];
    while let Some((id, left)) = stack.pop() {
        let (Some(node), Some(employee)) = (tree.node(id), tree.employee(id)) else {
            continue;
        };
        let width = subtree_width(tree, id);
        let x = left + (width - CARD.width) / 2.0;
        let y = node.depth as f64 * (CARD.height + V_GAP);
        let rect = Rect::from_origin_size((x, y), CARD) + origin;
        boxes.insert(employee.id.clone(), rect);

        let mut child_left = left;
        for &child in tree.children_of(id) {
            stack.push((child, child_left));
            child_left += subtree_width(tree, child) + H_GAP;
        }
    }
    boxes
}

/// Lay out, mount, and measure one frame.
fn frame(chart: &mut OrgChart<Card>, container: &ContainerMetrics) {
    let boxes = layout(&chart.view_tree(), container.client_rect.origin().to_vec2());
    let diff = chart.sync_mounts(|e| Card(boxes[&e.id]));
    // Cards that stay mounted may have moved.
    for (id, rect) in &boxes {
        if !diff.mounted.contains(id) {
            chart.remount(id, Card(*rect));
        }
    }
    chart.on_frame(container);
}

fn print_chart(chart: &OrgChart<Card>) {
    match chart.selection_stats() {
        Some(stats) => println!("== {} ({}) ==", stats.name, stats.member_label()),
        None => println!("== All departments ({} people) ==", chart.employees().len()),
    }
    if let Some(message) = chart.empty_state() {
        println!("{message}");
        return;
    }
    for card in chart.cards() {
        let marker = if card.is_highlighted() { "*" } else { " " };
        let toggle = card.toggle_label().unwrap_or_default();
        println!(
            "{marker}{:indent$}{} - {} [{}] {toggle}",
            "",
            card.employee.name,
            card.employee.role,
            card.employee.department,
            indent = card.depth * 2,
        );
    }
    let content = chart
        .registry()
        .boxes()
        .fold(Rect::ZERO, |acc, (_, rect)| acc.union(rect));
    println!(
        "{} connectors, overlay {} bytes",
        chart.connectors().len(),
        chart.render_overlay(content.size()).len()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let employees: Vec<Employee> = PEOPLE
        .iter()
        .map(|&(id, name, role, department, manager)| {
            Employee::new(id, name, role, department, manager)
        })
        .collect();
    if let Err(err) = validate_forest(&employees) {
        eprintln!("refusing malformed hierarchy: {err}");
        return;
    }

    let container = ContainerMetrics::new(Rect::new(20.0, 100.0, 1420.0, 900.0), Vec2::ZERO);
    let mut window = Window::default();
    let mut chart = OrgChart::new(employees);
    // Listeners live exactly as long as the chart is mounted.
    let observers = ObserverScope::attach(&mut window);
    frame(&mut chart, &container);
    print_chart(&chart);

    chart.toggle("2");
    frame(&mut chart, &container);
    print_chart(&chart);

    for department in ["Sales", "Technology", "Space Program", "all"] {
        chart.select_department(department);
        frame(&mut chart, &container);
        print_chart(&chart);
    }

    // A burst of resize events costs one pass.
    for _ in 0..3 {
        for listener in observers.source().dispatch(Subscription::WindowResize) {
            chart.notify(listener);
        }
    }
    let passes = chart.scheduler().passes();
    chart.on_frame(&container);
    println!(
        "resize burst: {} pass(es), {} coalesced",
        chart.scheduler().passes() - passes,
        chart.scheduler().coalesced()
    );
    println!("{}", chart.render_overlay(Size::new(1400.0, 800.0)));

    drop(observers);
    println!("unmounted: {} listener(s) left", window.listeners.len());
}
