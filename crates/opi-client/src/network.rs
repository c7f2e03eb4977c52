//! VRF operations against the network backend.

use crate::error::ClientResult;
use crate::models::{Vrf, VrfCreateRequest, VrfPage};
use crate::transport::{Transport, decode, send};

const VRF_COLLECTION: &str = "/v1/vrfs";

/// Client for VRF resources.
#[derive(Debug, Clone)]
pub struct VrfClient {
    transport: Transport,
}

impl VrfClient {
    /// Connect to the server at `address`, given as `host:port` or a full URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the address cannot be parsed or the HTTP client
    /// cannot be constructed.
    pub fn new(address: &str) -> ClientResult<Self> {
        Ok(Self {
            transport: Transport::open(address)?,
        })
    }

    /// Create a VRF.
    ///
    /// An empty `name` lets the server assign one, and a `vni` of `None`
    /// leaves the VRF without a VXLAN backing. An empty `vtep` is treated as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server rejects it, or the
    /// response cannot be decoded.
    pub async fn create(
        &self,
        name: &str,
        vni: Option<u32>,
        loopback: &str,
        vtep: &str,
    ) -> ClientResult<Vrf> {
        let mut url = self.transport.endpoint(VRF_COLLECTION)?;
        if !name.is_empty() {
            url.query_pairs_mut().append_pair("vrf_id", name);
        }

        let body = VrfCreateRequest {
            vni,
            loopback: loopback.to_string(),
            vtep: (!vtep.is_empty()).then(|| vtep.to_string()),
        };

        let response = send("create vrf", self.transport.client.post(url).json(&body)).await?;
        decode("create vrf", response).await
    }

    /// Delete the VRF named `name`.
    ///
    /// With `allow_missing`, deleting an absent VRF succeeds silently.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the server rejects it.
    pub async fn delete(&self, name: &str, allow_missing: bool) -> ClientResult<()> {
        let mut url = self.transport.endpoint(&format!("{VRF_COLLECTION}/{name}"))?;
        if allow_missing {
            url.query_pairs_mut().append_pair("allow_missing", "true");
        }

        send("delete vrf", self.transport.client.delete(url)).await?;
        Ok(())
    }

    /// Fetch the VRF named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server rejects it, or the
    /// response cannot be decoded.
    pub async fn get(&self, name: &str) -> ClientResult<Vrf> {
        let url = self.transport.endpoint(&format!("{VRF_COLLECTION}/{name}"))?;

        let response = send("get vrf", self.transport.client.get(url)).await?;
        decode("get vrf", response).await
    }

    /// Fetch one page of VRFs.
    ///
    /// A `page_size` of zero or less defers to the server default, and
    /// `page_token` carries the cursor from the previous page, empty for the
    /// first call.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server rejects it, or the
    /// response cannot be decoded.
    pub async fn list(&self, page_size: i32, page_token: &str) -> ClientResult<VrfPage> {
        let mut url = self.transport.endpoint(VRF_COLLECTION)?;
        if page_size > 0 {
            url.query_pairs_mut()
                .append_pair("page_size", &page_size.to_string());
        }
        if !page_token.is_empty() {
            url.query_pairs_mut().append_pair("page_token", page_token);
        }

        let response = send("list vrfs", self.transport.client.get(url)).await?;
        decode("list vrfs", response).await
    }

    /// Apply a partial update to the VRF named `name`.
    ///
    /// `update_mask` lists the field paths the server should touch; an empty
    /// mask requests a full update. With `allow_missing`, updating an absent
    /// VRF creates it.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server rejects it, or the
    /// response cannot be decoded.
    pub async fn update(
        &self,
        name: &str,
        update_mask: &[String],
        allow_missing: bool,
    ) -> ClientResult<Vrf> {
        let mut url = self.transport.endpoint(&format!("{VRF_COLLECTION}/{name}"))?;
        if !update_mask.is_empty() {
            url.query_pairs_mut()
                .append_pair("update_mask", &update_mask.join(","));
        }
        if allow_missing {
            url.query_pairs_mut().append_pair("allow_missing", "true");
        }

        let response = send("update vrf", self.transport.client.patch(url)).await?;
        decode("update vrf", response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HEADER_REQUEST_ID;
    use crate::{ClientError, StatusCode};
    use httpmock::Method::PATCH;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn create_sends_vni_and_vrf_id() -> ClientResult<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/vrfs")
                .query_param("vrf_id", "blue")
                .header_exists(HEADER_REQUEST_ID)
                .json_body(json!({
                    "vni": 100,
                    "loopback": "10.0.0.1/32",
                    "vtep": "10.0.0.100/32"
                }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "blue",
                    "vni": 100,
                    "loopback": "10.0.0.1/32",
                    "vtep": "10.0.0.100/32",
                    "status": "up"
                }));
        });

        let client = VrfClient::new(&server.base_url())?;
        let vrf = client
            .create("blue", Some(100), "10.0.0.1/32", "10.0.0.100/32")
            .await?;

        mock.assert();
        assert_eq!(vrf.name, "blue");
        assert_eq!(vrf.vni, Some(100));
        Ok(())
    }

    #[tokio::test]
    async fn create_omits_unset_fields() -> ClientResult<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/vrfs")
                .json_body(json!({"loopback": "10.0.0.5/32"}));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"name": "green", "loopback": "10.0.0.5/32"}));
        });

        let client = VrfClient::new(&server.base_url())?;
        let vrf = client.create("", None, "10.0.0.5/32", "").await?;

        mock.assert();
        assert_eq!(vrf.name, "green");
        assert_eq!(vrf.vni, None);
        Ok(())
    }

    #[tokio::test]
    async fn delete_requests_allow_missing() -> ClientResult<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/v1/vrfs/blue")
                .query_param("allow_missing", "true");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({}));
        });

        let client = VrfClient::new(&server.base_url())?;
        client.delete("blue", true).await?;

        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn get_maps_server_rejection() -> ClientResult<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/vrfs/ghost");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(json!({"message": "vrf 'ghost' not found"}));
        });

        let client = VrfClient::new(&server.base_url())?;
        let error = client
            .get("ghost")
            .await
            .expect_err("missing vrf should fail");

        mock.assert();
        assert!(matches!(
            error,
            ClientError::Api { operation, status, ref message }
                if operation == "get vrf"
                    && status == StatusCode::NOT_FOUND
                    && message.contains("vrf 'ghost' not found")
        ));
        Ok(())
    }

    #[tokio::test]
    async fn list_threads_page_parameters() -> ClientResult<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/vrfs")
                .query_param("page_size", "2")
                .query_param("page_token", "t1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "vrfs": [{"name": "blue", "loopback": "10.0.0.1/32"}],
                    "next_page_token": "t2"
                }));
        });

        let client = VrfClient::new(&server.base_url())?;
        let page = client.list(2, "t1").await?;

        mock.assert();
        assert_eq!(page.vrfs.len(), 1);
        assert_eq!(page.next_page_token, "t2");
        Ok(())
    }

    #[tokio::test]
    async fn list_omits_default_page_parameters() -> ClientResult<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/vrfs")
                .query_param_missing("page_size")
                .query_param_missing("page_token");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"vrfs": []}));
        });

        let client = VrfClient::new(&server.base_url())?;
        let page = client.list(0, "").await?;

        mock.assert();
        assert!(page.vrfs.is_empty());
        assert!(page.next_page_token.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_joins_mask_fields() -> ClientResult<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/v1/vrfs/blue")
                .query_param("update_mask", "vni,loopback")
                .query_param("allow_missing", "true");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"name": "blue", "vni": 200, "loopback": "10.0.0.2/32"}));
        });

        let client = VrfClient::new(&server.base_url())?;
        let mask = vec!["vni".to_string(), "loopback".to_string()];
        let vrf = client.update("blue", &mask, true).await?;

        mock.assert();
        assert_eq!(vrf.vni, Some(200));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_request_error() -> ClientResult<()> {
        let client = VrfClient::new("127.0.0.1:1")?;
        let error = client
            .get("blue")
            .await
            .expect_err("closed port should fail");

        assert!(matches!(error, ClientError::Request { operation, .. } if operation == "get vrf"));
        Ok(())
    }
}
