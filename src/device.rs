use crate::{
    error::{FryerError, Result},
    protocol::{self, Request},
    schema::{DeviceVariant, MiotAddress, MiotSchema},
    transport::{ActionRequest, MiotTransport, PropertyRequest},
    types::FryerStatus,
};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// Client for one MIoT air fryer
///
/// `AirFryer` binds a transport session to the mapping profile selected from
/// the device's model string and exposes the typed surface: a batched status
/// refresh and one method per controllable property and action.
///
/// All operations are serialized per client — the underlying transport is a
/// single logical session, so a second call issued while one is in flight
/// waits its turn rather than interleaving wire traffic. Distinct devices
/// are fully independent; clients are cheap to share behind [`Arc`].
///
/// A poller is expected to call [`refresh_status`](Self::refresh_status) on
/// a fixed interval ([`crate::DEFAULT_SCAN_INTERVAL_SECS`] is the
/// recommended period) and read the cached snapshot via
/// [`status`](Self::status) in between.
///
/// # Examples
///
/// ```no_run
/// use airfryers::{AirFryer, MiotTransport};
/// use std::sync::Arc;
///
/// # async fn demo(transport: Arc<dyn MiotTransport>) -> airfryers::Result<()> {
/// let fryer = AirFryer::new(transport, "careli.fryer.maf02");
///
/// let status = fryer.refresh_status().await?;
/// println!("status: {}, on: {}", status.status, status.is_on());
///
/// fryer.set_target_temperature(180).await?;
/// fryer.set_target_time(20).await?;
/// fryer.start_cook().await?;
/// # Ok(())
/// # }
/// ```
pub struct AirFryer {
    transport: Arc<dyn MiotTransport>,
    model: String,
    variant: DeviceVariant,
    schema: &'static MiotSchema,
    status: RwLock<FryerStatus>,
    // Serializes all wire traffic for this device; the transport is one
    // logical session.
    inflight: Mutex<()>,
}

impl AirFryer {
    /// Create a client for the device behind `transport`
    ///
    /// The model string selects the mapping profile once, for the life of
    /// the client. Unrecognized models fall back to the careli profile with
    /// a logged warning.
    #[must_use]
    pub fn new(transport: Arc<dyn MiotTransport>, model: impl Into<String>) -> Self {
        let model = model.into();
        let variant = DeviceVariant::from_model(&model);
        info!("created client for {} ({:?} profile)", model, variant);

        Self {
            transport,
            model,
            variant,
            schema: variant.schema(),
            status: RwLock::new(FryerStatus::default()),
            inflight: Mutex::new(()),
        }
    }

    /// The model string this client was constructed with
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The mapping profile selected from the model string
    #[must_use]
    pub const fn variant(&self) -> DeviceVariant {
        self.variant
    }

    /// The most recently decoded status snapshot
    ///
    /// Starts out as the all-`Unknown` default until the first successful
    /// [`refresh_status`](Self::refresh_status). A failed refresh leaves the
    /// previous snapshot in place.
    pub async fn status(&self) -> FryerStatus {
        self.status.read().await.clone()
    }

    /// True if the cached snapshot says the device is on
    pub async fn is_on(&self) -> bool {
        self.status.read().await.is_on()
    }

    /// Read all mapped properties in one batch and decode them
    ///
    /// Individual properties the device failed to answer degrade to
    /// absent/`Unknown` fields in the snapshot; only a failure of the round
    /// trip itself is an error, and it leaves the cached snapshot untouched.
    ///
    /// # Errors
    ///
    /// Returns a transport-level error if the batched read fails entirely.
    pub async fn refresh_status(&self) -> Result<FryerStatus> {
        let _guard = self.inflight.lock().await;

        let requests: Vec<PropertyRequest> = self
            .schema
            .properties()
            .map(|(_, siid, piid)| PropertyRequest { siid, piid })
            .collect();

        debug!("refreshing status ({} properties)", requests.len());
        let results = self.transport.get_properties(&requests).await?;

        let snapshot = protocol::decode_status(self.schema, &results);
        *self.status.write().await = snapshot.clone();
        Ok(snapshot)
    }

    /// Execute a validated command
    ///
    /// Resolves the request's symbolic name against this client's schema and
    /// dispatches the write or invocation through the transport.
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::Schema`] if the name does not resolve to the
    /// right kind of address for this variant, or a transport-level error if
    /// the device could not be reached or rejected the operation.
    pub async fn execute(&self, request: Request) -> Result<()> {
        let _guard = self.inflight.lock().await;

        match request {
            Request::Write { name, value } => {
                let MiotAddress::Property { siid, piid } = self.schema.resolve(name)? else {
                    return Err(FryerError::Schema { name });
                };
                info!("writing {} = {}", name, value);
                self.transport
                    .set_property(PropertyRequest { siid, piid }, value)
                    .await
            }
            Request::Invoke { name, args } => {
                let MiotAddress::Action { siid, aiid } = self.schema.resolve(name)? else {
                    return Err(FryerError::Schema { name });
                };
                info!("invoking {}", name);
                self.transport
                    .call_action(ActionRequest { siid, aiid }, args)
                    .await
            }
        }
    }

    /// Set the scheduled delay before cooking starts (minutes, `0..=1440`)
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::OutOfRange`] for values outside the domain, or
    /// a transport-level error.
    pub async fn set_appoint_time(&self, minutes: i32) -> Result<()> {
        self.execute(Request::set_appoint_time(minutes)?).await
    }

    /// Select a recipe by its raw token
    ///
    /// # Errors
    ///
    /// Returns a transport-level error; the token itself is not validated at
    /// this layer.
    pub async fn set_recipe_id(&self, recipe_id: impl Into<String> + Send) -> Result<()> {
        self.execute(Request::set_recipe_id(recipe_id)).await
    }

    /// Set the food quantity code (`0..=5`)
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::OutOfRange`] for values outside the domain, or
    /// a transport-level error.
    pub async fn set_food_quanty(&self, code: i32) -> Result<()> {
        self.execute(Request::set_food_quanty(code)?).await
    }

    /// Set the cooking duration (minutes, `1..=1440`)
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::OutOfRange`] for values outside the domain, or
    /// a transport-level error.
    pub async fn set_target_time(&self, minutes: i32) -> Result<()> {
        self.execute(Request::set_target_time(minutes)?).await
    }

    /// Set the cooking temperature (°C, `40..=200`)
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::OutOfRange`] for values outside the domain, or
    /// a transport-level error.
    pub async fn set_target_temperature(&self, celsius: i32) -> Result<()> {
        self.execute(Request::set_target_temperature(celsius)?).await
    }

    /// Start cooking with the current settings
    ///
    /// # Errors
    ///
    /// Returns a transport-level error if the invocation fails.
    pub async fn start_cook(&self) -> Result<()> {
        self.execute(Request::start_cook()).await
    }

    /// Cancel the current cooking program
    ///
    /// # Errors
    ///
    /// Returns a transport-level error if the invocation fails.
    pub async fn cancel_cooking(&self) -> Result<()> {
        self.execute(Request::cancel_cooking()).await
    }

    /// Pause the current cooking program
    ///
    /// # Errors
    ///
    /// Returns a transport-level error if the invocation fails.
    pub async fn pause(&self) -> Result<()> {
        self.execute(Request::pause()).await
    }

    /// Resume a paused cooking program
    ///
    /// # Errors
    ///
    /// Returns a transport-level error if the invocation fails.
    pub async fn resume_cooking(&self) -> Result<()> {
        self.execute(Request::resume_cooking()).await
    }

    /// Start one of the built-in cooking programs by preset token
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::UnknownPreset`] if the token matches no preset,
    /// or a transport-level error.
    pub async fn start_custom_cook(&self, preset_id: &str) -> Result<()> {
        self.execute(Request::start_custom_cook(preset_id)?).await
    }
}
