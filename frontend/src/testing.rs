use std::cell::RefCell;
use std::collections::VecDeque;

use serde::Serialize;

use crate::app::App;
use crate::config::ClientConfig;
use crate::connect_fetch::{HttpReply, Transport};
use crate::error::ClientError;
use crate::host::Host;

#[derive(Debug, Clone)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub no_store: bool,
    pub body: Option<serde_json::Value>,
    pub token: Option<String>,
}

/// Replays canned replies in order and records every request.
/// An exhausted script fails like a dropped connection.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpReply, ClientError>>>,
    calls: RefCell<Vec<Call>>,
}

pub fn reply(status: u16, body: &str) -> Result<HttpReply, ClientError> {
    Ok(HttpReply { status, body: body.to_string() })
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Result<HttpReply, ClientError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            calls: RefCell::default(),
        }
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(ClientError::Js("TypeError: Failed to fetch".to_string()))])
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next(&self, call: Call) -> Result<HttpReply, ClientError> {
        self.calls.borrow_mut().push(call);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Js("no scripted reply".to_string())))
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, url: &str, no_store: bool) -> Result<HttpReply, ClientError> {
        self.next(Call { method: "GET", url: url.to_string(), no_store, body: None, token: None })
    }

    async fn post_json<T: Serialize>(&self, url: &str, data: &T, token: Option<&str>) -> Result<HttpReply, ClientError> {
        let body = serde_json::to_value(data)?;
        self.next(Call {
            method: "POST",
            url: url.to_string(),
            no_store: false,
            body: Some(body),
            token: token.map(str::to_string),
        })
    }
}

/// Counts reloads and holds scheduled tasks until fired by hand.
#[derive(Default)]
pub struct RecordingHost {
    reloads: RefCell<usize>,
    tasks: RefCell<VecDeque<(u32, Box<dyn FnOnce()>)>>,
}

impl RecordingHost {
    pub fn reloads(&self) -> usize {
        *self.reloads.borrow()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.tasks.borrow().iter().map(|(millis, _)| *millis).collect()
    }

    pub fn fire_next(&self) {
        let task = self.tasks.borrow_mut().pop_front();
        if let Some((_, task)) = task {
            task();
        }
    }
}

impl Host for RecordingHost {
    fn reload(&self) {
        *self.reloads.borrow_mut() += 1;
    }

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push_back((millis, task));
    }
}

pub fn test_app(transport: ScriptedTransport) -> App<ScriptedTransport, RecordingHost> {
    test_app_with(ClientConfig::default(), transport)
}

pub fn test_app_with(config: ClientConfig, transport: ScriptedTransport) -> App<ScriptedTransport, RecordingHost> {
    App::new(config, transport, RecordingHost::default())
}
