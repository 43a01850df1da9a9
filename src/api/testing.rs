//
//  ibm-cis
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test doubles for code built on [`RequestExecutor`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::common::CisError;
use super::request::RequestDescriptor;
use super::transport::{DetailedResponse, RequestExecutor};

/// Records every descriptor and answers with queued bodies, falling back
/// to an empty success envelope.
#[derive(Default)]
pub struct RecordingExecutor {
    requests: Mutex<Vec<RequestDescriptor>>,
    responses: Mutex<VecDeque<Value>>,
}

impl RecordingExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_responses(responses: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        })
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> RequestDescriptor {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was executed")
    }
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    async fn execute(&self, request: RequestDescriptor) -> Result<DetailedResponse, CisError> {
        self.requests.lock().unwrap().push(request);
        let body = self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            json!({"success": true, "errors": [], "messages": [], "result": {}})
        });
        Ok(DetailedResponse::new(200, body))
    }
}
