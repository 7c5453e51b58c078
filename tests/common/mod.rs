//! Shared test doubles for the generative service.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use stargazer::detail::DetailClient;
use stargazer::gemini::*;
use tokio::sync::watch;

pub const TEXT_MODEL: &str = "text-model";
pub const IMAGE_MODEL: &str = "image-model";

type Responder =
    Box<dyn Fn(&str, &GenerateContentRequest) -> Result<GenerateContentResponse, ClientError> + Send + Sync>;

/// Holds matching requests until released.
#[derive(Clone)]
pub struct Gate {
    tx: Arc<watch::Sender<bool>>,
}

impl Gate {
    fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn release(&self) {
        self.tx.send_replace(true);
    }

    async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        let _ = rx.wait_for(|open| *open).await;
    }
}

/// In-process stand-in for the generative service.
///
/// Counts invocations, records the models and prompts it was asked for, and
/// can hold requests whose model or prompt mentions a gated key.
pub struct FakeService {
    configured: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, GenerateContentRequest)>>,
    gates: Mutex<Vec<(String, Gate)>>,
    respond: Responder,
}

impl FakeService {
    pub fn new(
        respond: impl Fn(&str, &GenerateContentRequest) -> Result<GenerateContentResponse, ClientError>
            + Send
            + Sync
            + 'static,
    ) -> Arc<Self> {
        Self::build(true, respond)
    }

    /// A service without a credential. Any invocation is a test failure.
    pub fn unconfigured() -> Arc<Self> {
        Self::build(false, |_, _| panic!("unconfigured service must not be called"))
    }

    fn build(
        configured: bool,
        respond: impl Fn(&str, &GenerateContentRequest) -> Result<GenerateContentResponse, ClientError>
            + Send
            + Sync
            + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            configured,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            gates: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    /// Valid details (story derived from the object name) and a PNG image.
    pub fn healthy() -> Arc<Self> {
        Self::new(|model, request| {
            let prompt = request.prompt_text();
            if model == IMAGE_MODEL {
                Ok(image_response("image/png", "UE5HREFUQQ=="))
            } else {
                let name = catalog_name_in(&prompt).unwrap_or("unknown");
                Ok(text_response(&detail_json(&format!("{}의 이야기", name))))
            }
        })
    }

    /// Hold requests whose model or prompt contains `key` until the gate opens.
    pub fn gate(&self, key: &str) -> Gate {
        let gate = Gate::new();
        self.gates.lock().push((key.to_string(), gate.clone()));
        gate
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, GenerateContentRequest)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl GenerativeService for FakeService {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push((model.to_string(), request.clone()));

        let prompt = request.prompt_text();
        let gate = self
            .gates
            .lock()
            .iter()
            .find(|(key, _)| model == key || prompt.contains(key.as_str()))
            .map(|(_, gate)| gate.clone());
        if let Some(gate) = gate {
            gate.wait().await;
        }

        (self.respond)(model, request)
    }
}

pub fn client_with(service: Arc<FakeService>) -> DetailClient {
    DetailClient::new(service, TEXT_MODEL, IMAGE_MODEL)
}

pub fn detail_json(story: &str) -> String {
    serde_json::json!({
        "story": story,
        "bestViewingTime": "1월 밤 9시 이후 남쪽 하늘",
        "findingTip": "나란히 선 세 개의 별, 삼태성을 먼저 찾으세요",
        "difficulty": "Easy",
        "interestingFacts": [
            "베텔게우스는 언제든 초신성이 될 수 있습니다",
            "리겔은 태양보다 수만 배 밝습니다",
            "오리온 대성운은 맨눈으로도 보입니다"
        ]
    })
    .to_string()
}

pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse::from_parts(vec![Part::text(text)])
}

pub fn image_response(mime: &str, data: &str) -> GenerateContentResponse {
    GenerateContentResponse::from_parts(vec![Part::text("Here you go"), Part::inline(mime, data)])
}

/// The first catalog display name mentioned in `prompt`.
pub fn catalog_name_in(prompt: &str) -> Option<&'static str> {
    stargazer::catalog::calendar()
        .iter()
        .flat_map(|m| m.objects.iter())
        .map(|e| e.name.as_str())
        .find(|name| prompt.contains(name))
}
