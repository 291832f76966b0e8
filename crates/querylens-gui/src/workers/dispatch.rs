use std::sync::mpsc;

use querylens_core::api::ApiClient;
use querylens_core::config::ClientConfig;
use querylens_core::error::QueryLensError;
use tracing::{info, warn};

use crate::messages::{WorkerCommand, WorkerResult};

use super::requests;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    config: &ClientConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
    let config = config.clone();

    std::thread::Builder::new()
        .name("querylens-worker".into())
        .spawn(move || {
            worker_loop(&config, cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    config: &ClientConfig,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let client = match ApiClient::new(config) {
        Ok(client) => {
            info!(server = client.base_url(), "Worker ready");
            send_log(&tx, &ctx, format!("Server: {}", client.base_url()));
            Some(client)
        }
        Err(e) => {
            warn!("No usable server configuration: {e}");
            None
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        let result = match client.as_ref() {
            Some(client) => requests::handle(client, cmd),
            None => WorkerResult::Failed {
                action: cmd.action(),
                error: QueryLensError::InvalidServerUrl(config.server_url.clone()),
            },
        };
        send(&tx, &ctx, result);
    }
}
