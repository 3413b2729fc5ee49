use crate::{
    ElementsRequest, GlobalState, TransferRequest, VmSpec, VtClient, VtResult,
    core::domain::model::requests::{to_body, with_names},
    resources::{body, decode, names},
};
use reqwest::Method;
use serde_json::Value;

impl VtClient {
    /// Retrieves every VM and group.
    ///
    /// The snapshot is decoded as a whole: a single VM with an unknown
    /// `status` makes the call return `None`.
    ///
    /// `GET {conn}/list`
    pub async fn list(&self) -> Option<GlobalState> {
        let response = self.transport.send(Method::GET, "/list", None).await?;
        decode("list", response)
    }

    /// Creates a VM. Every field of `params` is expected to be set.
    ///
    /// `params` is validated first; invalid parameters are logged and no
    /// request is sent.
    ///
    /// `POST {conn}/add`
    pub async fn add<P: VmSpec>(&self, params: &P) -> Option<GlobalState> {
        let payload = body("add", checked_payload(params))?;
        let response = self
            .transport
            .send(Method::POST, "/add", Some(payload))
            .await?;
        decode("add", response)
    }

    /// Applies `params` to every VM in `vm_names`.
    ///
    /// Unset fields are left unchanged on the service side.
    ///
    /// `POST {conn}/set`
    pub async fn set<P, I, S>(&self, params: &P, vm_names: I) -> Option<GlobalState>
    where
        P: VmSpec,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let payload = body(
            "set",
            checked_payload(params).and_then(|payload| with_names(payload, names(vm_names))),
        )?;
        let response = self
            .transport
            .send(Method::POST, "/set", Some(payload))
            .await?;
        decode("set", response)
    }

    /// Removes the named VMs or groups.
    ///
    /// `POST {conn}/rm`
    pub async fn rm<I, S>(&self, vm_names: I) -> Option<GlobalState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let payload = body("rm", to_body(&ElementsRequest::removal(names(vm_names))))?;
        let response = self
            .transport
            .send(Method::POST, "/rm", Some(payload))
            .await?;
        decode("rm", response)
    }

    /// Creates the VM `name` from an uploaded file.
    ///
    /// The file uses the format returned by `list`; the VM name it contains
    /// is replaced by `name`.
    ///
    /// `POST {conn}/import`
    pub async fn vtimport(&self, name: &str, file_name: &str) -> Option<GlobalState> {
        let payload = body("import", to_body(&TransferRequest::new(name, file_name)))?;
        let response = self
            .transport
            .send(Method::POST, "/import", Some(payload))
            .await?;
        decode("import", response)
    }

    /// Writes the description of VM `name` to a server-side file.
    ///
    /// The file can then be retrieved with [`download`](Self::download) and
    /// is listed by [`listfiles`](Self::listfiles).
    ///
    /// `POST {conn}/export`
    pub async fn vtexport(&self, name: &str, file_name: &str) -> Option<Value> {
        let payload = body("export", to_body(&TransferRequest::new(name, file_name)))?;
        self.transport
            .send(Method::POST, "/export", Some(payload))
            .await
    }
}

fn checked_payload<P: VmSpec>(params: &P) -> VtResult<Value> {
    params.validate()?;
    params.to_payload()
}
