use gpt_client::ClientError;

use crate::runtime::AppStatus;

use super::AppController;

impl AppController {
    pub fn set_status(&mut self, status: AppStatus) {
        let was_busy = self.state.status.is_busy();
        let is_busy = status.is_busy();
        if is_busy && !was_busy {
            self.state.status_metrics.start();
        }
        if !is_busy {
            self.state.status_metrics.stop();
        }
        self.state.status = status;
    }

    pub fn report(&mut self, err: &ClientError) {
        log::warn!("{err}");
        let status = match err {
            ClientError::Busy => AppStatus::Notice("waiting for the current reply (Esc cancels)".into()),
            other => AppStatus::Error(other.to_string()),
        };
        self.set_status(status);
    }
}
