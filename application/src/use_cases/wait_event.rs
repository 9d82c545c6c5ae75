//! Blocking wait for one membership notification
//!
//! The membership channel hands over one protocol message per pump. The
//! wait keeps pumping until the notification sink has recorded a view,
//! then returns that view. Nothing bounds the wait unless
//! [`WaitOptions`] asks for a timeout or carries a cancellation token.

use crate::config::WaitOptions;
use crate::ports::error::ServiceError;
use crate::ports::membership::MembershipChannel;
use quorumtool_domain::{ClusterView, ViewMailbox};
use crate::use_cases::shared::log_failure;
use tracing::{debug, trace};

const DISPATCH_OP: &str = "quorum_dispatch";

/// Pump `channel` until a view lands in `mailbox`, and take it.
///
/// Only one wait may be outstanding per mailbox. Tracking must already
/// be started; stopping it afterwards is the caller's job.
pub async fn wait_for_one_event(
    channel: &mut dyn MembershipChannel,
    mailbox: &mut ViewMailbox,
    options: &WaitOptions,
) -> Result<ClusterView, ServiceError> {
    let pump = pump_until_delivered(channel, mailbox);

    let bounded = async {
        match options.timeout {
            Some(limit) => match tokio::time::timeout(limit, pump).await {
                Ok(result) => result,
                Err(_) => Err(ServiceError::Timeout { op: DISPATCH_OP }),
            },
            None => pump.await,
        }
    };

    match &options.cancellation {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(ServiceError::Cancelled),
                result = bounded => result,
            }
        }
        None => bounded.await,
    }
}

/// Stop tracking after a wait.
///
/// An interrupted wait may have abandoned a frame halfway through, so the
/// session is closed instead of sending another request over it.
pub(crate) async fn end_tracking(
    channel: &mut dyn MembershipChannel,
    waited: &Result<ClusterView, ServiceError>,
) {
    match waited {
        Err(e) if e.is_interrupted() => {
            debug!("Wait interrupted ({}); closing the membership session", e);
            channel.close();
        }
        _ => {
            if let Err(e) = channel.stop_tracking().await {
                log_failure("quorum_trackstop", &e);
            }
        }
    }
}

async fn pump_until_delivered(
    channel: &mut dyn MembershipChannel,
    mailbox: &mut ViewMailbox,
) -> Result<ClusterView, ServiceError> {
    let mut pumps: u64 = 0;
    loop {
        channel.dispatch_one(mailbox).await?;
        pumps += 1;

        if let Some(view) = mailbox.take() {
            debug!(
                "Membership view after {} pump(s): ring {}, {} member(s)",
                pumps,
                view.ring_id,
                view.node_count()
            );
            return Ok(view);
        }

        trace!("Pump {}: no membership view yet", pumps);
        // An adapter that never blocks would otherwise starve the timer
        tokio::task::yield_now().await;
    }
}
