//! tests/call_tests.rs
//! Pruebas de `ReminderCallService` con dobles en memoria.

#[cfg(test)]
mod tests {
    use actix_rt::test;

    use crate::models::call_log_model::STATUS_CALL_SENT;
    use crate::services::reminder_call_service::TriggerCallError;
    use crate::tests::doubles::{
        service_with, MemoryCallLogStore, StubCallPlacer, FROM_NUMBER, INSTRUCTION_URL,
    };

    #[test]
    async fn test_success_places_call_and_logs_once() {
        let placer = StubCallPlacer::returning("CA123");
        let store = MemoryCallLogStore::new();
        let service = service_with(placer.clone(), store.clone());

        let resp = service
            .trigger_call(Some("+15551234567"))
            .await
            .expect("la llamada debería colocarse");

        assert_eq!(resp.message, "Call initiated");
        assert_eq!(resp.call_sid, "CA123");

        let calls = placer.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to, "+15551234567");
        assert_eq!(calls[0].from, FROM_NUMBER);
        assert_eq!(calls[0].instruction_url, INSTRUCTION_URL);

        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].phone_number, "+15551234567");
        assert_eq!(entries[0].status, STATUS_CALL_SENT);
    }

    #[test]
    async fn test_missing_phone_number_has_no_side_effects() {
        for phone in [None, Some("")] {
            let placer = StubCallPlacer::returning("CA123");
            let store = MemoryCallLogStore::new();
            let service = service_with(placer.clone(), store.clone());

            let err = service.trigger_call(phone).await.unwrap_err();

            assert!(matches!(err, TriggerCallError::MissingPhoneNumber));
            assert!(err.is_client_error());
            assert_eq!(err.to_string(), "Phone number is required");
            assert!(placer.calls().is_empty());
            assert!(store.entries().is_empty());
        }
    }

    #[test]
    async fn test_placement_failure_returns_raw_message_and_logs_nothing() {
        let placer = StubCallPlacer::failing("The 'To' number 123 is not a valid phone number.");
        let store = MemoryCallLogStore::new();
        let service = service_with(placer.clone(), store.clone());

        let err = service.trigger_call(Some("123")).await.unwrap_err();

        assert!(matches!(err, TriggerCallError::Placement(_)));
        assert!(!err.is_client_error());
        assert_eq!(
            err.to_string(),
            "The 'To' number 123 is not a valid phone number."
        );
        assert_eq!(placer.calls().len(), 1);
        assert!(store.entries().is_empty());
    }

    // Comportamiento conocido: la llamada ya salió aunque el registro falle.
    #[test]
    async fn test_persistence_failure_after_call_was_placed() {
        let placer = StubCallPlacer::returning("CA999");
        let store = MemoryCallLogStore::failing("database is locked");
        let service = service_with(placer.clone(), store.clone());

        let err = service.trigger_call(Some("+15557654321")).await.unwrap_err();

        match &err {
            TriggerCallError::Persistence { call_sid, .. } => assert_eq!(call_sid, "CA999"),
            other => panic!("se esperaba Persistence, llegó {:?}", other),
        }
        assert_eq!(err.to_string(), "database is locked");
        assert!(!err.is_client_error());
        assert_eq!(placer.calls().len(), 1);
        assert!(store.entries().is_empty());
    }

    #[test]
    async fn test_each_request_is_logged_independently() {
        let placer = StubCallPlacer::returning("CA1");
        let store = MemoryCallLogStore::new();
        let service = service_with(placer.clone(), store.clone());

        service.trigger_call(Some("+15550000001")).await.unwrap();
        service.trigger_call(Some("+15550000002")).await.unwrap();
        let _ = service.trigger_call(None).await;

        let phones: Vec<String> = store
            .entries()
            .into_iter()
            .map(|e| e.phone_number)
            .collect();
        assert_eq!(phones, vec!["+15550000001", "+15550000002"]);
        assert_eq!(placer.calls().len(), 2);
    }
}
