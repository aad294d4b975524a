use crate::application::builder::CommitRequestBuilder;
use crate::config::SwitchSettings;
use crate::domain::event::CommitEvent;
use crate::domain::ports::{ContextStoreRef, DirectProcessorBox, SwitchTransportBox};
use crate::error::{CommitError, Result};
use tracing::debug;

/// Decides how the commit instruction reaches the counterpart FSP.
///
/// With switch integration enabled every commit goes through the hub: the
/// cached context is loaded, the request is assembled, and one transport call
/// is made. With integration disabled the counterpart must be proven
/// co-located before the event is delegated to the direct processor.
/// Exactly one of the two paths runs per call.
pub struct CommitRouter {
    store: ContextStoreRef,
    builder: CommitRequestBuilder,
    switch: SwitchTransportBox,
    direct: DirectProcessorBox,
    settings: SwitchSettings,
}

impl CommitRouter {
    pub fn new(
        store: ContextStoreRef,
        switch: SwitchTransportBox,
        direct: DirectProcessorBox,
        settings: SwitchSettings,
    ) -> Self {
        let builder = CommitRequestBuilder::new(store.clone());
        Self {
            store,
            builder,
            switch,
            direct,
            settings,
        }
    }

    /// Routes one commit attempt.
    pub async fn commit(&self, event: &CommitEvent) -> Result<()> {
        if self.settings.integration_enabled {
            self.commit_via_switch(event).await
        } else {
            self.commit_direct(event).await
        }
    }

    async fn commit_via_switch(&self, event: &CommitEvent) -> Result<()> {
        let context = self
            .store
            .get_context(&event.transaction_id)
            .await?
            .ok_or_else(|| CommitError::ContextNotFound(event.transaction_id.clone()))?;

        let source = context.fsp_id(event.current_role)?.clone();
        let destination = context.fsp_id(event.transfer_role)?.clone();

        let request = self.builder.build(&context).await?;

        debug!(
            transaction_id = %event.transaction_id,
            transfer_id = %request.transfer_id,
            destination = %destination.id,
            "posting transfer commit to switch"
        );
        self.switch
            .post_transfer_commit(&request, &source, &destination)
            .await
    }

    async fn commit_direct(&self, event: &CommitEvent) -> Result<()> {
        let counterpart = event.counterpart_fsp.as_ref().ok_or_else(|| {
            CommitError::RoutingViolation(
                "counterpart unknown, cannot commit without a switch".to_string(),
            )
        })?;

        if !counterpart.same_instance(&event.current_fsp) {
            return Err(CommitError::RoutingViolation(format!(
                "counterpart {} is on instance {}, not {}",
                counterpart.id, counterpart.instance, event.current_fsp.instance
            )));
        }

        debug!(
            transaction_id = %event.transaction_id,
            counterpart = %counterpart.id,
            "delegating commit to co-located FSP"
        );
        self.direct.commit(event).await
    }
}
