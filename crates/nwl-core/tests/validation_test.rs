//! Schema validation tests per request kind

use nwl_core::{
    rules_for, validate_fields, violations, FieldMap, RequestKind, ValidationError, Violation,
};

fn valid_map_fields() -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", "ORDER123");
    fields.insert("LgsType", "B2C");
    fields.insert("ShipType", "7-11");
    fields.insert("ReturnURL", "https://example.com/return");
    fields.insert("TimeStamp", 1234567890);
    fields
}

fn valid_create_order_fields() -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", "ORDER123");
    fields.insert("TradeType", "1");
    fields.insert("UserName", "Test User");
    fields.insert("UserEmail", "test@example.com");
    fields.insert("Amt", 100);
    fields.insert("LgsType", "B2C");
    fields.insert("ShipType", "7-11");
    fields.insert("TimeStamp", 1234567890);
    fields
}

#[test]
fn test_map_minimal_fields_valid() {
    assert!(validate_fields(rules_for(RequestKind::Map), &valid_map_fields()).is_ok());
}

#[test]
fn test_map_with_all_optional_fields_valid() {
    let mut fields = valid_map_fields();
    fields.insert("LogisticsSubType", "UNIMART");
    fields.insert("IsCollection", "Y");
    fields.insert("ServerReplyURL", "https://example.com/callback");
    fields.insert("ExtraData", "extra");
    fields.insert("Device", 1);

    assert!(validate_fields(rules_for(RequestKind::Map), &fields).is_ok());
}

#[test]
fn test_map_collects_every_violation() {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", ""); // empty, fails NonEmpty
    fields.insert("LgsType", "INVALID"); // not in the enum
    fields.insert("ShipType", "7-11");
    fields.insert("ReturnURL", "not-a-url");
    fields.insert("TimeStamp", 1234567890);

    let found = violations(rules_for(RequestKind::Map), &fields);
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|v| matches!(v, Violation::Invalid { .. })));
}

#[test]
fn test_map_missing_required_fields() {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", "ORDER123");

    let found = violations(rules_for(RequestKind::Map), &fields);
    // LgsType, ShipType, ReturnURL, TimeStamp all missing
    assert_eq!(found.len(), 4);
    assert!(found.iter().all(|v| matches!(v, Violation::Missing { .. })));
}

#[test]
fn test_map_bad_is_collection_flag() {
    let mut fields = valid_map_fields();
    fields.insert("IsCollection", "MAYBE");

    let err = validate_fields(rules_for(RequestKind::Map), &fields).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidValue { field, .. } if field == "IsCollection"
    ));
}

#[test]
fn test_create_order_minimal_fields_valid() {
    assert!(
        validate_fields(rules_for(RequestKind::CreateOrder), &valid_create_order_fields()).is_ok()
    );
}

#[test]
fn test_create_order_with_all_optional_fields_valid() {
    let mut fields = valid_create_order_fields();
    fields.insert("UserTel", "0912345678");
    fields.insert("StoreID", "123456");
    fields.insert("ReceiverName", "Receiver");
    fields.insert("ReceiverPhone", "0912345678");
    fields.insert("ReceiverCellPhone", "0912345678");
    fields.insert("ReceiverEmail", "receiver@example.com");
    fields.insert("LogisticsSubType", "UNIMART");

    assert!(validate_fields(rules_for(RequestKind::CreateOrder), &fields).is_ok());
}

#[test]
fn test_create_order_invalid_email() {
    let mut fields = valid_create_order_fields();
    fields.insert("UserEmail", "invalid-email");

    let err = validate_fields(rules_for(RequestKind::CreateOrder), &fields).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidValue { field, .. } if field == "UserEmail"
    ));
}

#[test]
fn test_create_order_invalid_receiver_email() {
    let mut fields = valid_create_order_fields();
    fields.insert("ReceiverEmail", "not-an-email");

    assert!(validate_fields(rules_for(RequestKind::CreateOrder), &fields).is_err());
}

#[test]
fn test_create_order_negative_amount() {
    let mut fields = valid_create_order_fields();
    fields.insert("Amt", -100);

    let err = validate_fields(rules_for(RequestKind::CreateOrder), &fields).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidValue { field, .. } if field == "Amt"
    ));
}

#[test]
fn test_create_order_invalid_trade_type() {
    let mut fields = valid_create_order_fields();
    fields.insert("TradeType", "2");

    assert!(validate_fields(rules_for(RequestKind::CreateOrder), &fields).is_err());
}

#[test]
fn test_query_order_minimal_fields_valid() {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", "ORDER123");
    fields.insert("TimeStamp", 1234567890);

    assert!(validate_fields(rules_for(RequestKind::QueryOrder), &fields).is_ok());
}

#[test]
fn test_query_order_with_logistics_id_valid() {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", "ORDER123");
    fields.insert("TimeStamp", "1234567890");
    fields.insert("LogisticsID", "LOG123");

    assert!(validate_fields(rules_for(RequestKind::QueryOrder), &fields).is_ok());
}

#[test]
fn test_query_order_empty_merchant_order_no() {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", "");
    fields.insert("TimeStamp", 1234567890);

    let err = validate_fields(rules_for(RequestKind::QueryOrder), &fields).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidValue { field, .. } if field == "MerchantOrderNo"
    ));
}

#[test]
fn test_print_order_schema_matches_query_order() {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", "ORDER123");
    fields.insert("TimeStamp", 1234567890);
    fields.insert("LogisticsID", "LOG123");

    assert!(validate_fields(rules_for(RequestKind::PrintOrder), &fields).is_ok());
    assert_eq!(rules_for(RequestKind::PrintOrder), rules_for(RequestKind::QueryOrder));
}

#[test]
fn test_time_stamp_accepts_string_or_integer() {
    for time_stamp in [
        nwl_core::FieldValue::Int(1234567890),
        nwl_core::FieldValue::Text("1234567890".to_string()),
    ] {
        let mut fields = FieldMap::new();
        fields.insert("MerchantOrderNo", "ORDER123");
        fields.insert("TimeStamp", time_stamp);

        assert!(validate_fields(rules_for(RequestKind::QueryOrder), &fields).is_ok());
    }
}
