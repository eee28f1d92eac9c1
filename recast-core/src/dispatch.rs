//! Message routing between the host runtime and interceptors.
//!
//! Receiver frameworks register interception callbacks against named message
//! types. Recast models that seam as an explicit dispatcher so tests and
//! embedders can deliver a message straight to a handler without any host
//! runtime behind it. A message type with no registered interceptor passes
//! through unchanged, matching the framework default.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::resolver::{ContentResolver, LoadRequest, ResolveError};

/// Message types a receiver routes to interceptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Sender asks to begin playback of identified content
    Load,
    /// Sender polls for current player status
    GetStatus,
}

/// Intercepts a sender message before the player consumes it.
///
/// An error from the interceptor rejects the message; the dispatcher
/// propagates the rejection to the host unchanged.
#[async_trait]
pub trait LoadInterceptor: Send + Sync + std::fmt::Debug {
    /// Inspects and possibly mutates the request in place.
    ///
    /// # Errors
    /// Implementation-specific; a returned error rejects the load.
    async fn intercept(&self, request: &mut LoadRequest) -> Result<(), ResolveError>;
}

#[async_trait]
impl LoadInterceptor for ContentResolver {
    async fn intercept(&self, request: &mut LoadRequest) -> Result<(), ResolveError> {
        self.resolve(request).await
    }
}

/// Routes incoming messages to registered interceptors.
#[derive(Debug, Default)]
pub struct MessageDispatcher {
    interceptors: HashMap<MessageType, Arc<dyn LoadInterceptor>>,
}

impl MessageDispatcher {
    /// Creates a dispatcher with no interceptors registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an interceptor for a message type, replacing any previous
    /// registration.
    pub fn register(&mut self, message_type: MessageType, interceptor: Arc<dyn LoadInterceptor>) {
        self.interceptors.insert(message_type, interceptor);
    }

    /// True when an interceptor is registered for the message type.
    pub fn has_interceptor(&self, message_type: MessageType) -> bool {
        self.interceptors.contains_key(&message_type)
    }

    /// Delivers a message, running the registered interceptor if any.
    ///
    /// # Errors
    /// Propagates the interceptor's rejection.
    pub async fn dispatch(
        &self,
        message_type: MessageType,
        request: &mut LoadRequest,
    ) -> Result<(), ResolveError> {
        match self.interceptors.get(&message_type) {
            Some(interceptor) => interceptor.intercept(request).await,
            None => {
                debug!(?message_type, "no interceptor registered, passing through");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalogSource;
    use crate::resolver::StreamProtocol;

    fn dispatcher_with_resolver() -> MessageDispatcher {
        let source = MockCatalogSource::with_records([(
            "movie1".to_string(),
            MockCatalogSource::record("T", "A", "u1", "u2"),
        )]);
        let resolver = ContentResolver::new(Arc::new(source), StreamProtocol::Dash);

        let mut dispatcher = MessageDispatcher::new();
        dispatcher.register(MessageType::Load, Arc::new(resolver));
        dispatcher
    }

    #[tokio::test]
    async fn test_load_message_reaches_resolver() {
        let dispatcher = dispatcher_with_resolver();
        let mut request = LoadRequest::for_content_id("movie1");

        dispatcher
            .dispatch(MessageType::Load, &mut request)
            .await
            .unwrap();

        assert_eq!(request.content_url.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn test_unregistered_message_passes_through() {
        let dispatcher = dispatcher_with_resolver();
        let mut request = LoadRequest::for_content_id("movie1");
        let before = request.clone();

        dispatcher
            .dispatch(MessageType::GetStatus, &mut request)
            .await
            .unwrap();

        assert_eq!(request, before);
    }

    #[tokio::test]
    async fn test_rejection_propagates_through_dispatcher() {
        let dispatcher = dispatcher_with_resolver();
        let mut request = LoadRequest::for_content_id("missing");

        let result = dispatcher.dispatch(MessageType::Load, &mut request).await;
        assert!(matches!(
            result,
            Err(ResolveError::ContentNotFound { .. })
        ));
    }

    #[test]
    fn test_registration_is_observable() {
        let dispatcher = dispatcher_with_resolver();
        assert!(dispatcher.has_interceptor(MessageType::Load));
        assert!(!dispatcher.has_interceptor(MessageType::GetStatus));
    }
}
