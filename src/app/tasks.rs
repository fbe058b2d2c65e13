//! Worker threads for create jobs
//!
//! Each job runs on its own thread with a blocking client and sends exactly one
//! outcome back. The UI thread drains the channel once per frame.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use eframe::egui;
use reqwest::blocking::Client;

use crate::config::ImagenConfig;
use crate::create::{CreateJob, CreateOutcome, Endpoints, build_client, run_job};

pub struct TaskRunner {
    client: Option<Client>,
    endpoints: Endpoints,
    tx: Sender<CreateOutcome>,
    rx: Receiver<CreateOutcome>,
    in_flight: usize,
}

impl TaskRunner {
    pub fn new(options: &ImagenConfig) -> Self {
        let (tx, rx) = channel();
        let mut runner = Self {
            client: None,
            endpoints: options.endpoints(),
            tx,
            rx,
            in_flight: 0,
        };
        runner.reconfigure(options);
        runner
    }

    /// Rebuild the client and endpoints after settings change
    pub fn reconfigure(&mut self, options: &ImagenConfig) {
        self.endpoints = options.endpoints();
        self.client = match build_client(&options.user_agent, options.request_timeout_secs) {
            Ok(client) => Some(client),
            Err(e) => {
                eprintln!("[imagen] Failed to build HTTP client: {}", e);
                None
            }
        };
    }

    /// Run `job` on a worker thread, or report it failed right away if there
    /// is no usable client
    pub fn spawn(&mut self, ctx: &egui::Context, job: CreateJob) -> Option<CreateOutcome> {
        let Some(client) = self.client.clone() else {
            return Some(job.failed("HTTP client unavailable, check Settings"));
        };
        let endpoints = self.endpoints.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        let spawned = std::thread::Builder::new()
            .name("imagen-task".to_string())
            .spawn({
                let job = job.clone();
                move || {
                    let outcome = run_job(&client, &endpoints, job);
                    let _ = tx.send(outcome);
                    ctx.request_repaint();
                }
            });

        match spawned {
            Ok(_) => {
                self.in_flight += 1;
                None
            }
            Err(e) => Some(job.failed(&format!("Couldn't start worker thread: {}", e))),
        }
    }

    /// Collect every outcome that has arrived since the last frame
    pub fn drain(&mut self) -> Vec<CreateOutcome> {
        let mut outcomes = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    outcomes.push(outcome);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        outcomes
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
