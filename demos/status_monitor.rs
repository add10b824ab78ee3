//! Polls a simulated fryer the way a home-automation integration would:
//! one batched refresh per interval, reading the cached snapshot in between.
//!
//! The simulator counts a cook down by one minute per poll so the output
//! actually moves.

use airfryers::{
    ActionRequest, AirFryer, MiotTransport, PropertyRequest, PropertyResult, Result,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::time::interval;
use tracing::info;

/// A fryer mid-cook: fixed settings, decrementing time left.
struct CookingFryer {
    left_time: AtomicI64,
}

#[async_trait]
impl MiotTransport for CookingFryer {
    async fn get_properties(&self, requests: &[PropertyRequest]) -> Result<Vec<PropertyResult>> {
        let left = self.left_time.fetch_sub(1, Ordering::SeqCst).max(0);
        let status = if left > 0 { 4 } else { 6 }; // Cooking / Cooked

        Ok(requests
            .iter()
            .map(|request| {
                let value = match (request.siid, request.piid) {
                    (2, 1) => json!(status),
                    (2, 2) => json!(0),
                    (2, 3) => json!(15),
                    (2, 4) => json!(200),
                    (2, 5) => json!(left),
                    (3, 1) => json!("M1"),
                    (3, 6) => json!(3),
                    (3, 7) => json!(1),
                    // The simulator answers the rest with a failure code,
                    // exercising the decoder's partial tolerance.
                    _ => return PropertyResult::failed(request.siid, request.piid, -4004),
                };
                PropertyResult::ok(request.siid, request.piid, value)
            })
            .collect())
    }

    async fn set_property(&self, _request: PropertyRequest, _value: Value) -> Result<()> {
        Ok(())
    }

    async fn call_action(&self, _request: ActionRequest, _args: Vec<Value>) -> Result<()> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("📊 Airfryers Status Monitor Example");

    let transport = Arc::new(CookingFryer {
        left_time: AtomicI64::new(5),
    });
    let fryer = AirFryer::new(transport, "careli.fryer.maf02");

    // A real poller would use airfryers::DEFAULT_SCAN_INTERVAL_SECS; the
    // demo ticks every second so it finishes quickly.
    let mut poll = interval(Duration::from_secs(1));

    loop {
        poll.tick().await;

        let status = match fryer.refresh_status().await {
            Ok(status) => status,
            Err(e) => {
                // A failed poll keeps the previous snapshot; report and retry.
                info!("⚠️  Refresh failed ({e}), keeping last snapshot");
                continue;
            }
        };

        println!("\n📊 Status Update");
        println!("┌─────────────────────────────────────────┐");
        println!("│ Status: {:24}        │", format!("{}", status.status));
        println!(
            "│ Recipe: {:24}        │",
            status.recipe_name().unwrap_or("-")
        );
        println!(
            "│ Target: {:3}°C for {:3} min              │",
            status.target_temperature.unwrap_or(0),
            status.target_time.unwrap_or(0)
        );
        println!(
            "│ Left:   {:3} min                         │",
            status.left_time.unwrap_or(0)
        );
        println!("│ Food:   {:24}        │", format!("{}", status.food_quanty));
        println!("│ Fault:  {:24}        │", format!("{}", status.device_fault));
        println!("└─────────────────────────────────────────┘");

        if !status.is_on() {
            info!("🍽️  Cook finished");
            break;
        }
    }

    info!("🎉 Status monitoring completed!");
    Ok(())
}
