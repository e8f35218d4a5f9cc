use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::gateways::{
    CheckoutProvider, CheckoutRequest, CreatedSession, ProviderSession, SessionMetadata,
};

/// In-memory provider for tests: sessions are held in a map and their
/// payment status can be scripted per session.
#[derive(Default)]
pub struct MockProvider {
    counter: AtomicU64,
    sessions: Mutex<HashMap<String, ProviderSession>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_paid(&self, session_id: &str, payment_intent: &str) {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(session) = sessions.get_mut(session_id) {
            session.payment_status = "paid".to_string();
            session.payment_intent = Some(payment_intent.to_string());
        }
    }

    pub fn insert_session(&self, session: ProviderSession) {
        self.sessions.lock().unwrap().insert(session.id.clone(), session);
    }

    pub fn paid_session(id: &str, metadata: &SessionMetadata, payment_intent: &str) -> ProviderSession {
        ProviderSession {
            id: id.to_string(),
            payment_status: "paid".to_string(),
            payment_intent: Some(payment_intent.to_string()),
            metadata: HashMap::from([
                ("bookingId".to_string(), metadata.booking_id.clone()),
                ("userId".to_string(), metadata.user_id.clone()),
                ("vendorId".to_string(), metadata.vendor_id.clone()),
            ]),
        }
    }
}

#[async_trait::async_trait]
impl CheckoutProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CreatedSession> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let session_id = format!("cs_mock_{n}");
        let session = ProviderSession {
            id: session_id.clone(),
            payment_status: "unpaid".to_string(),
            payment_intent: None,
            metadata: HashMap::from([
                ("bookingId".to_string(), request.metadata.booking_id),
                ("userId".to_string(), request.metadata.user_id),
                ("vendorId".to_string(), request.metadata.vendor_id),
            ]),
        };
        self.sessions.lock().unwrap().insert(session_id.clone(), session);

        Ok(CreatedSession {
            url: format!("https://checkout.mock.local/{session_id}"),
            session_id,
        })
    }

    async fn retrieve_checkout_session(&self, session_id: &str) -> Result<ProviderSession> {
        self.sessions
            .lock()
            .unwrap()
            .get(session_id)
            .cloned()
            .ok_or_else(|| anyhow!("mock session {session_id} not found"))
    }
}
