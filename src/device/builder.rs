// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder.

use crate::device::LydosHybridDevice;
use crate::error::Error;
use crate::protocol::GatewayApi;
use crate::types::DeviceInfo;

/// Builder for [`LydosHybridDevice`].
///
/// Created by [`LydosHybridDevice::builder`],
/// [`LydosHybridDevice::from_device_info`] or [`LydosHybridDevice::http`].
///
/// # Examples
///
/// ```no_run
/// use lydos_lib::protocol::ApiConfig;
/// use lydos_lib::types::Gateway;
/// use lydos_lib::LydosHybridDevice;
///
/// # async fn example() -> lydos_lib::Result<()> {
/// let client = ApiConfig::new()
///     .with_credentials("me@example.com", "secret")
///     .into_client()?;
///
/// // Fetches plant data and settings once
/// let device = LydosHybridDevice::builder(client.clone(), Gateway::new("F0AD4E0C3A1B")?)
///     .build()
///     .await?;
///
/// // No network access, every getter returns None until refreshed
/// let empty = LydosHybridDevice::builder(client, Gateway::new("F0AD4E0C3A1B")?)
///     .build_without_fetch();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LydosHybridDeviceBuilder<A: GatewayApi> {
    api: A,
    info: DeviceInfo,
}

impl<A: GatewayApi> LydosHybridDeviceBuilder<A> {
    pub(crate) fn new(api: A, info: DeviceInfo) -> Self {
        Self { api, info }
    }

    /// Sets the plant name shown to users.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.info.name = Some(name.into());
        self
    }

    /// Returns the identity the device will be created with.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Builds the device and fetches its plant data and settings.
    ///
    /// # Errors
    ///
    /// Returns error if either request fails.
    pub async fn build(self) -> Result<LydosHybridDevice<A>, Error> {
        let device = LydosHybridDevice::new(self.api, self.info);
        device.update_state().await?;
        device.update_settings().await?;

        tracing::debug!(gw = %device.gateway(), "Lydos Hybrid device ready");
        Ok(device)
    }

    /// Builds the device without any request.
    ///
    /// The mirror starts empty; call the `update_*` methods before reading.
    #[must_use]
    pub fn build_without_fetch(self) -> LydosHybridDevice<A> {
        LydosHybridDevice::new(self.api, self.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeApi};
    use crate::types::Gateway;

    fn gw() -> Gateway {
        Gateway::new("F0AD4E0C3A1B").unwrap()
    }

    #[test]
    fn builder_with_name() {
        let builder = LydosHybridDevice::builder(FakeApi::default(), gw()).with_name("Garage");
        assert_eq!(builder.info().name.as_deref(), Some("Garage"));
        assert_eq!(builder.info().gw, gw());
    }

    #[test]
    fn build_without_fetch_sends_nothing() {
        let device = LydosHybridDevice::builder(FakeApi::default(), gw()).build_without_fetch();
        assert!(device.api().calls().is_empty());
        assert!(device.state().data().is_empty());
    }

    #[tokio::test]
    async fn build_fetches_data_then_settings() {
        let device = LydosHybridDevice::builder(FakeApi::default(), gw())
            .build()
            .await
            .unwrap();
        assert_eq!(
            device.api().calls(),
            vec![Call::PlantData(gw()), Call::PlantSettings(gw())]
        );
    }
}
