use crate::classify::ReadMode;
use crate::entry::FileSource;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use super::{read_file, FileContent};

pub struct ReadRequest {
    pub token: u64,
    pub source: FileSource,
    pub mode: ReadMode,
    pub mime: String,
}

pub struct ReadOutcome {
    pub token: u64,
    pub result: Result<FileContent, String>,
}

pub fn spawn_worker(
    ctx: eframe::egui::Context,
    limit: u64,
) -> (Sender<ReadRequest>, Receiver<ReadOutcome>) {
    let (cmd_tx, cmd_rx) = channel::<ReadRequest>();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(request) = cmd_rx.recv() {
            let result = read_file(&request.source, request.mode, &request.mime, limit)
                .map_err(|e| e.to_string());
            if let Err(e) = &result {
                log::warn!("Read #{} failed: {}", request.token, e);
            }
            if res_tx
                .send(ReadOutcome {
                    token: request.token,
                    result,
                })
                .is_err()
            {
                break;
            }
            ctx.request_repaint();
        }
        log::debug!("Reader worker stopped");
    });

    (cmd_tx, res_rx)
}
