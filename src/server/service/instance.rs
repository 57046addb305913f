use serde_json::{Map, Value};

use crate::server::{
    compute::{
        model::{DeleteInstanceRequest, InsertInstanceRequest},
        ComputeClient,
    },
    config::Config,
    error::Error,
    util::template,
};

pub struct InstanceService<'a> {
    compute: &'a ComputeClient,
    config: &'a Config,
}

impl<'a> InstanceService<'a> {
    /// Creates a new instance of [`InstanceService`]
    pub fn new(compute: &'a ComputeClient, config: &'a Config) -> Self {
        Self { compute, config }
    }

    /// Launch an instance described by the launch template and request data
    ///
    /// Renders the configured launch template with the request body, parses the result
    /// as an instance-insert request, submits it to the compute API, and waits for the
    /// resulting operation to finish.
    ///
    /// # Arguments
    /// - `data`: Top-level JSON object of the request body, merged into the template
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - `()`: The instance was created and its operation completed
    /// - [`Error`]: A template, parse, or compute API failure
    pub async fn launch(&self, data: &Map<String, Value>) -> Result<(), Error> {
        let body = template::render(&self.config.vm_req_template, data)?;
        let request: InsertInstanceRequest = serde_json::from_str(&body)?;

        let operation = self.compute.insert_instance(&request).await?;

        self.compute
            .wait_for_operation(&request.project, &request.zone, &operation)
            .await?;

        tracing::info!(instance = %request.instance_resource.name, "Instance created");

        Ok(())
    }

    /// Kill the instance named by the kill template and request data
    ///
    /// Renders the configured kill template with the request body, parses the result as
    /// an instance-delete request, submits it to the compute API, and waits for the
    /// resulting operation to finish.
    ///
    /// # Arguments
    /// - `data`: Top-level JSON object of the request body, merged into the template
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - `()`: The instance was deleted and its operation completed
    /// - [`Error`]: A template, parse, or compute API failure
    pub async fn kill(&self, data: &Map<String, Value>) -> Result<(), Error> {
        let body = template::render(&self.config.vm_kill_template, data)?;
        let request: DeleteInstanceRequest = serde_json::from_str(&body)?;

        let operation = self.compute.delete_instance(&request).await?;

        self.compute
            .wait_for_operation(&request.project, &request.zone, &operation)
            .await?;

        tracing::info!(instance = %request.instance, "Instance deleted");

        Ok(())
    }
}
