//! Discount Resolver: catalog assembly, rate resolution, special-ID
//! creation atomicity and deletion rules.

mod common;

use common::*;
use kusina::db::models::{
    Discount, DiscountSelection, GenerateBill, InHouseCreate, OrderItemInput, PlaceOrder,
    SpecialIdCreate, SpecialIdDetail, SpecialIdSubtype,
};
use kusina::ledger;
use kusina::AppError;

fn senior_request(member_id: &str) -> SpecialIdCreate {
    SpecialIdCreate {
        member_id: member_id.into(),
        subtype: SpecialIdSubtype::Senior,
        id_number: "SC-19570630".into(),
        birthdate: Some("1957-06-30".into()),
        disability: None,
    }
}

// ── Catalog assembly ────────────────────────────────────────────────

#[tokio::test]
async fn test_catalog_merges_inhouse_and_special_id() {
    let pool = test_pool().await;

    let promo = ledger::create_in_house(
        &pool,
        InHouseCreate {
            description: "Employee meal".into(),
            rate: 0.25,
        },
    )
    .await
    .unwrap();
    let senior = ledger::create_special_id(&pool, senior_request(MEMBER_ALICE))
        .await
        .unwrap();
    let pwd = ledger::create_special_id(
        &pool,
        SpecialIdCreate {
            member_id: MEMBER_BEN.into(),
            subtype: SpecialIdSubtype::Pwd,
            id_number: "PWD-001122".into(),
            birthdate: None,
            disability: Some("Low vision".into()),
        },
    )
    .await
    .unwrap();

    let catalog = ledger::list_catalog(&pool).await.unwrap();
    assert_eq!(catalog.len(), 3);

    match &catalog[0] {
        Discount::InHouse {
            id,
            description,
            rate,
        } => {
            assert_eq!(*id, promo);
            assert_eq!(description, "Employee meal");
            assert_eq!(*rate, 0.25);
        }
        other => panic!("expected in-house entry, got {other:?}"),
    }
    match &catalog[1] {
        Discount::SpecialId {
            id,
            member_id,
            detail: SpecialIdDetail::Senior { birthdate, .. },
        } => {
            assert_eq!(*id, senior);
            assert_eq!(member_id, MEMBER_ALICE);
            assert_eq!(birthdate, "1957-06-30");
        }
        other => panic!("expected senior entry, got {other:?}"),
    }
    match &catalog[2] {
        Discount::SpecialId {
            id,
            detail: SpecialIdDetail::Pwd { disability, .. },
            ..
        } => {
            assert_eq!(*id, pwd);
            assert_eq!(disability, "Low vision");
        }
        other => panic!("expected PWD entry, got {other:?}"),
    }
}

#[tokio::test]
async fn test_catalog_entry_wire_shape() {
    let pool = test_pool().await;
    ledger::create_special_id(&pool, senior_request(MEMBER_ALICE))
        .await
        .unwrap();

    let catalog = ledger::list_catalog(&pool).await.unwrap();
    let value = serde_json::to_value(&catalog[0]).unwrap();
    assert_eq!(value["kind"], "special_id");
    assert_eq!(value["detail"]["subtype"], "senior");
    assert_eq!(value["detail"]["birthdate"], "1957-06-30");
}

// ── Rate resolution ─────────────────────────────────────────────────

#[tokio::test]
async fn test_rate_for_inhouse_uses_stored_rate() {
    let pool = test_pool().await;
    let id = ledger::create_in_house(
        &pool,
        InHouseCreate {
            description: "Happy hour".into(),
            rate: 0.15,
        },
    )
    .await
    .unwrap();
    assert_eq!(ledger::rate_for(&pool, Some(id)).await.unwrap(), 0.15);
}

#[tokio::test]
async fn test_rate_for_special_id_is_fixed() {
    let pool = test_pool().await;
    let senior = ledger::create_special_id(&pool, senior_request(MEMBER_ALICE))
        .await
        .unwrap();
    let pwd = ledger::create_special_id(
        &pool,
        SpecialIdCreate {
            member_id: MEMBER_BEN.into(),
            subtype: SpecialIdSubtype::Pwd,
            id_number: "PWD-001122".into(),
            birthdate: None,
            disability: Some("Low vision".into()),
        },
    )
    .await
    .unwrap();

    // 12% for both subtypes, regardless of what the rows say
    assert_eq!(ledger::rate_for(&pool, Some(senior)).await.unwrap(), 0.12);
    assert_eq!(ledger::rate_for(&pool, Some(pwd)).await.unwrap(), 0.12);
}

#[tokio::test]
async fn test_rate_for_absent_selection_is_zero() {
    let pool = test_pool().await;
    assert_eq!(ledger::rate_for(&pool, None).await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_rate_for_unknown_discount() {
    let pool = test_pool().await;
    let result = ledger::rate_for(&pool, Some(7)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

// ── Creation validation & atomicity ─────────────────────────────────

#[tokio::test]
async fn test_in_house_validation() {
    let pool = test_pool().await;

    let blank = ledger::create_in_house(
        &pool,
        InHouseCreate {
            description: "  ".into(),
            rate: 0.10,
        },
    )
    .await;
    assert!(matches!(blank, Err(AppError::Validation(_))));

    let out_of_range = ledger::create_in_house(
        &pool,
        InHouseCreate {
            description: "Too generous".into(),
            rate: 1.5,
        },
    )
    .await;
    assert!(matches!(out_of_range, Err(AppError::Validation(_))));

    assert_eq!(count_rows(&pool, "discount").await, 0);
}

#[tokio::test]
async fn test_senior_without_birthdate_writes_nothing() {
    let pool = test_pool().await;
    let mut request = senior_request(MEMBER_ALICE);
    request.birthdate = None;

    let result = ledger::create_special_id(&pool, request).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    // All-or-nothing: no row in any of the three tables
    assert_eq!(count_rows(&pool, "discount").await, 0);
    assert_eq!(count_rows(&pool, "specialid_discount").await, 0);
    assert_eq!(count_rows(&pool, "senior_detail").await, 0);
}

#[tokio::test]
async fn test_pwd_without_disability_writes_nothing() {
    let pool = test_pool().await;
    let result = ledger::create_special_id(
        &pool,
        SpecialIdCreate {
            member_id: MEMBER_BEN.into(),
            subtype: SpecialIdSubtype::Pwd,
            id_number: "PWD-001122".into(),
            birthdate: None,
            disability: None,
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(count_rows(&pool, "discount").await, 0);
    assert_eq!(count_rows(&pool, "pwd_detail").await, 0);
}

#[tokio::test]
async fn test_special_id_field_validation() {
    let pool = test_pool().await;

    let mut long_id = senior_request(MEMBER_ALICE);
    long_id.id_number = "SC-1957-06-30-EXTRA".into(); // over 12 chars
    assert!(matches!(
        ledger::create_special_id(&pool, long_id).await,
        Err(AppError::Validation(_))
    ));

    let mut bad_date = senior_request(MEMBER_ALICE);
    bad_date.birthdate = Some("June 30, 1957".into());
    assert!(matches!(
        ledger::create_special_id(&pool, bad_date).await,
        Err(AppError::Validation(_))
    ));

    let unknown_member = ledger::create_special_id(&pool, senior_request("000000000000")).await;
    assert!(matches!(unknown_member, Err(AppError::NotFound(_))));

    assert_eq!(count_rows(&pool, "discount").await, 0);
}

// ── Deletion ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_discount_cascades_sub_records() {
    let pool = test_pool().await;
    let id = ledger::create_special_id(&pool, senior_request(MEMBER_ALICE))
        .await
        .unwrap();

    assert!(ledger::delete_discount(&pool, id).await.unwrap());
    assert_eq!(count_rows(&pool, "discount").await, 0);
    assert_eq!(count_rows(&pool, "specialid_discount").await, 0);
    assert_eq!(count_rows(&pool, "senior_detail").await, 0);

    assert!(!ledger::delete_discount(&pool, id).await.unwrap());
    assert!(matches!(
        ledger::rate_for(&pool, Some(id)).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_discount_referenced_by_bill_refused() {
    let pool = test_pool().await;
    let discount_id = ledger::create_in_house(
        &pool,
        InHouseCreate {
            description: "Opening promo".into(),
            rate: 0.10,
        },
    )
    .await
    .unwrap();

    let order = ledger::place_order(
        &pool,
        PlaceOrder {
            member_id: MEMBER_ALICE.into(),
            items: vec![OrderItemInput {
                dish_id: DISH_ADOBO,
                quantity: 1,
            }],
        },
    )
    .await
    .unwrap();
    ledger::generate_bill(
        &pool,
        GenerateBill {
            order_id: order.id,
            discount: DiscountSelection::Existing(discount_id),
            tax_rate: 0.12,
            service_fee_rate: 0.00,
        },
    )
    .await
    .unwrap();

    let result = ledger::delete_discount(&pool, discount_id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(count_rows(&pool, "discount").await, 1);
}
