use crate::{
    ElementsRequest, GlobalState, VtClient,
    core::domain::model::requests::to_body,
    resources::{body, decode, names},
};
use reqwest::Method;

impl VtClient {
    /// Adds VMs or groups to `group`, creating the group if needed.
    ///
    /// `POST {conn}/link`
    pub async fn link<I, S>(&self, members: I, group: &str) -> Option<GlobalState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_request("link", "/link", group, names(members)).await
    }

    /// Takes VMs or groups out of `group`.
    ///
    /// `POST {conn}/unlink`
    pub async fn unlink<I, S>(&self, members: I, group: &str) -> Option<GlobalState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_request("unlink", "/unlink", group, names(members)).await
    }

    async fn group_request(
        &self,
        operation: &str,
        path: &str,
        group: &str,
        members: Vec<String>,
    ) -> Option<GlobalState> {
        let payload = body(operation, to_body(&ElementsRequest::new(group, members)))?;
        let response = self
            .transport
            .send(Method::POST, path, Some(payload))
            .await?;
        decode(operation, response)
    }
}
