//! Remote controller operations against the storage backend.

use crate::error::ClientResult;
use crate::models::{
    MultipathMode, NvmeController, NvmeControllerCreateRequest, NvmeControllerPage,
};
use crate::transport::{Transport, decode, send};

const CONTROLLER_COLLECTION: &str = "/v1/nvme/controllers";

/// Client for remote `NVMe` controller resources.
#[derive(Debug, Clone)]
pub struct NvmeControllerClient {
    transport: Transport,
}

impl NvmeControllerClient {
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

    /// Create a remote controller.
    ///
    /// An empty `id` lets the server assign one.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server rejects it, or the
    /// response cannot be decoded.
    pub async fn create(
        &self,
        id: &str,
        multipath: MultipathMode,
    ) -> ClientResult<NvmeController> {
        let mut url = self.transport.endpoint(CONTROLLER_COLLECTION)?;
        if !id.is_empty() {
            url.query_pairs_mut().append_pair("controller_id", id);
        }

        let body = NvmeControllerCreateRequest { multipath };

        let response = send(
            "create nvme controller",
            self.transport.client.post(url).json(&body),
        )
        .await?;
        decode("create nvme controller", response).await
    }

    /// Delete the remote controller named `name`.
    ///
    /// With `allow_missing`, deleting an absent controller succeeds silently.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the server rejects it.
    pub async fn delete(&self, name: &str, allow_missing: bool) -> ClientResult<()> {
        let mut url = self
            .transport
            .endpoint(&format!("{CONTROLLER_COLLECTION}/{name}"))?;
        if allow_missing {
            url.query_pairs_mut().append_pair("allow_missing", "true");
        }

        send("delete nvme controller", self.transport.client.delete(url)).await?;
        Ok(())
    }

    /// Fetch the remote controller named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server rejects it, or the
    /// response cannot be decoded.
    pub async fn get(&self, name: &str) -> ClientResult<NvmeController> {
        let url = self
            .transport
            .endpoint(&format!("{CONTROLLER_COLLECTION}/{name}"))?;

        let response = send("get nvme controller", self.transport.client.get(url)).await?;
        decode("get nvme controller", response).await
    }

    /// Fetch one page of remote controllers.
    ///
    /// A `page_size` of zero or less defers to the server default, and
    /// `page_token` carries the cursor from the previous page, empty for the
    /// first call.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server rejects it, or the
    /// response cannot be decoded.
    pub async fn list(&self, page_size: i32, page_token: &str) -> ClientResult<NvmeControllerPage> {
        let mut url = self.transport.endpoint(CONTROLLER_COLLECTION)?;
        if page_size > 0 {
            url.query_pairs_mut()
                .append_pair("page_size", &page_size.to_string());
        }
        if !page_token.is_empty() {
            url.query_pairs_mut().append_pair("page_token", page_token);
        }

        let response = send("list nvme controllers", self.transport.client.get(url)).await?;
        decode("list nvme controllers", response).await
    }
}
