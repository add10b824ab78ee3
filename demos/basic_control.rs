//! Drives a simulated fryer through a full cook cycle.
//!
//! Real deployments implement [`MiotTransport`] over the miio UDP session;
//! the simulator here keeps the demo runnable without hardware.

use airfryers::{
    ActionRequest, AirFryer, MiotTransport, PropertyRequest, PropertyResult, Result,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::time::sleep;
use tracing::info;

/// In-memory fryer: properties live in a map, actions flip the status.
struct SimulatedFryer {
    properties: Mutex<HashMap<(u32, u32), Value>>,
}

impl SimulatedFryer {
    fn new() -> Self {
        let mut properties = HashMap::new();
        properties.insert((2, 1), json!(1)); // status: Standby
        properties.insert((2, 2), json!(0)); // device_fault: NoFaults
        properties.insert((2, 3), json!(15)); // target_time
        properties.insert((2, 4), json!(180)); // target_temperature
        properties.insert((2, 5), json!(0)); // left_time
        properties.insert((3, 1), json!("M0")); // recipe_id
        properties.insert((3, 5), json!(0)); // appoint_time
        properties.insert((3, 6), json!(1)); // food_quanty
        properties.insert((3, 7), json!(1)); // preheat_switch
        properties.insert((3, 8), json!(0)); // appoint_time_left
        properties.insert((3, 9), json!(0)); // recipe_sync
        properties.insert((3, 10), json!(0)); // turn_pot
        Self {
            properties: Mutex::new(properties),
        }
    }
}

#[async_trait]
impl MiotTransport for SimulatedFryer {
    async fn get_properties(&self, requests: &[PropertyRequest]) -> Result<Vec<PropertyResult>> {
        let properties = self.properties.lock().unwrap();
        Ok(requests
            .iter()
            .map(|request| match properties.get(&(request.siid, request.piid)) {
                Some(value) => PropertyResult::ok(request.siid, request.piid, value.clone()),
                None => PropertyResult::failed(request.siid, request.piid, -4004),
            })
            .collect())
    }

    async fn set_property(&self, request: PropertyRequest, value: Value) -> Result<()> {
        self.properties
            .lock()
            .unwrap()
            .insert((request.siid, request.piid), value);
        Ok(())
    }

    async fn call_action(&self, request: ActionRequest, _args: Vec<Value>) -> Result<()> {
        let mut properties = self.properties.lock().unwrap();
        let status = match (request.siid, request.aiid) {
            (2, 1) | (3, 1) => 4, // start_cook / start_custom_cook -> Cooking
            (2, 2) => 0,          // cancel_cooking -> Shutdown
            (2, 3) => 2,          // pause -> Pause
            (3, 2) => 4,          // resume_cooking -> Cooking
            _ => return Ok(()),
        };
        properties.insert((2, 1), json!(status));
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("🍟 Airfryers Basic Control Example");

    let transport = Arc::new(SimulatedFryer::new());
    let fryer = AirFryer::new(transport, "careli.fryer.maf02");

    // Display initial status
    let status = fryer.refresh_status().await?;
    info!("📊 Initial Status:");
    info!("  Status: {}", status.status);
    info!("  Power: {}", if status.is_on() { "ON" } else { "OFF" });
    info!("  Fault: {}", status.device_fault);
    info!("  Recipe: {}", status.recipe_name().unwrap_or("-"));

    // Configure a manual cook: 20 minutes at 180°C
    info!("🌡️  Setting target temperature to 180°C...");
    fryer.set_target_temperature(180).await?;

    info!("⏲️  Setting target time to 20 minutes...");
    fryer.set_target_time(20).await?;

    info!("🔥 Starting cook...");
    fryer.start_cook().await?;

    sleep(Duration::from_secs(1)).await;
    let status = fryer.refresh_status().await?;
    info!("📊 Status: {} (on: {})", status.status, status.is_on());

    // Pause and resume
    info!("⏸️  Pausing...");
    fryer.pause().await?;
    let status = fryer.refresh_status().await?;
    info!("📊 Status: {}", status.status);

    info!("▶️  Resuming...");
    fryer.resume_cooking().await?;
    let status = fryer.refresh_status().await?;
    info!("📊 Status: {}", status.status);

    // Switch to a built-in program instead
    info!("🍗 Starting the Chicken Wings preset (M2)...");
    fryer.start_custom_cook("M2").await?;
    let status = fryer.refresh_status().await?;
    info!("📊 Status: {}", status.status);

    // Done
    info!("🛑 Cancelling cooking...");
    fryer.cancel_cooking().await?;
    let status = fryer.refresh_status().await?;
    info!("📊 Final Status: {} (on: {})", status.status, status.is_on());

    info!("🎉 Basic control example completed!");
    Ok(())
}
