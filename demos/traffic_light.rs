//! Traffic Light
//!
//! This example demonstrates a host whose API changes with its state.
//!
//! Key concepts:
//! - Data properties loaded from JSON, behavior attached in code
//! - Methods that exist only in some states (`turnOnPedSign` in `go`)
//! - Enter/exit hooks driving host fields
//! - Observing lifecycle events
//!
//! Run with: cargo run --example traffic_light

use stateful::builder::TableBuilder;
use stateful::{Host, InterfaceTable, Properties, StateEvent, Stateful, StatefulError};
use std::sync::{Arc, OnceLock};
use tracing::Level;

const STATES: &str = r#"{
    "stop":    { "color": "red" },
    "go":      { "color": "green" },
    "caution": { "color": "yellow" }
}"#;

struct TrafficLight {
    pedestrians: bool,
    stateful: Stateful<TrafficLight>,
    properties: Properties<TrafficLight>,
}

impl Host for TrafficLight {
    fn stateful(&self) -> &Stateful<Self> {
        &self.stateful
    }

    fn stateful_mut(&mut self) -> &mut Stateful<Self> {
        &mut self.stateful
    }

    fn properties(&self) -> &Properties<Self> {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties<Self> {
        &mut self.properties
    }

    fn states() -> Option<Arc<InterfaceTable<Self>>> {
        static TABLE: OnceLock<Option<Arc<InterfaceTable<TrafficLight>>>> = OnceLock::new();
        TABLE.get_or_init(|| build_states().ok().map(Arc::new)).clone()
    }
}

fn build_states() -> Result<InterfaceTable<TrafficLight>, stateful::builder::BuildError> {
    TableBuilder::from_json(STATES)?
        .amend("stop", |stop| {
            stop.method("next", |light: &mut TrafficLight| light.transition("go"))
        })
        .amend("go", |go| {
            go.method("next", |light: &mut TrafficLight| light.transition("caution"))
                .method("turnOnPedSign", |light: &mut TrafficLight| {
                    light.pedestrians = true;
                    Ok(())
                })
                .method("turnOffPedSign", |light: &mut TrafficLight| {
                    light.pedestrians = false;
                    Ok(())
                })
                .on_enter(|light: &mut TrafficLight| light.call("turnOnPedSign"))
                .on_exit(|light: &mut TrafficLight| light.call("turnOffPedSign"))
        })
        .amend("caution", |caution| {
            caution.method("next", |light: &mut TrafficLight| light.transition("stop"))
        })
        .build()
}

impl TrafficLight {
    fn new() -> Result<Self, StatefulError> {
        let mut light = Self {
            pedestrians: false,
            stateful: Stateful::with_observer(|event: &StateEvent| println!("  event: {}", event)),
            properties: Properties::new(),
        };
        Stateful::bind(&mut light, Some("stop"), None)?;
        Ok(light)
    }

    fn describe(&self) {
        let color = self
            .get("color")
            .and_then(|c| c.as_str())
            .unwrap_or("dark");
        println!(
            "State: {:<8} color: {:<7} pedestrians: {:<5} ped sign API: {}",
            self.current_state().unwrap_or("-"),
            color,
            self.pedestrians,
            self.responds_to("turnOnPedSign")
        );
    }
}

fn main() -> Result<(), StatefulError> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("=== Traffic Light ===\n");

    let mut light = TrafficLight::new()?;
    light.describe();

    for _ in 0..3 {
        println!();
        light.call("next")?;
        light.describe();
    }

    println!("\nTransition to an unknown state:");
    match light.transition("flashing") {
        Ok(()) => println!("unexpectedly succeeded"),
        Err(e) => println!("  error: {}", e),
    }
    light.describe();

    println!("\n=== Example Complete ===");
    Ok(())
}
