//! Discount Resolver
//!
//! Assembles the unified discount catalog from the four legacy tables and
//! computes the applicable rate for a bill. In-house discounts carry their
//! stored flat rate; special-ID (Senior/PWD) discounts always resolve to the
//! fixed 12% regardless of subtype.

use sqlx::{SqliteConnection, SqlitePool};

use crate::db::models::discount::{DISCOUNT_TYPE_INHOUSE, DISCOUNT_TYPE_SPECIAL_ID};
use crate::db::models::{
    Discount, InHouseCreate, SpecialIdCreate, SpecialIdDetail, SpecialIdSubtype, SPECIAL_ID_RATE,
};
use crate::db::repository::{self as repo, IdFamily};
use crate::utils::time::parse_date;
use crate::utils::validation::{
    validate_rate, validate_required_text, MAX_DESC_LEN, MAX_MEMBER_ID_LEN, MAX_SPECIAL_ID_LEN,
};
use crate::utils::{AppError, AppResult};

/// Load the full catalog: in-house and special-ID discounts with resolved
/// Senior/PWD detail, as one normalized tagged union.
pub async fn list_catalog(pool: &SqlitePool) -> AppResult<Vec<Discount>> {
    let mut conn = pool.acquire().await?;

    let inhouse = repo::discount::list_inhouse(&mut conn).await?;
    let specialid = repo::discount::list_specialid(&mut conn).await?;
    let seniors = repo::discount::list_senior(&mut conn).await?;
    let pwds = repo::discount::list_pwd(&mut conn).await?;

    let mut catalog: Vec<Discount> = inhouse
        .into_iter()
        .map(|row| Discount::InHouse {
            id: row.discount_id,
            description: row.description,
            rate: row.rate,
        })
        .collect();

    for row in specialid {
        let detail = if let Some(s) = seniors.iter().find(|s| s.discount_id == row.discount_id) {
            SpecialIdDetail::Senior {
                id_number: s.id_number.clone(),
                birthdate: s.birthdate.clone(),
            }
        } else if let Some(p) = pwds.iter().find(|p| p.discount_id == row.discount_id) {
            SpecialIdDetail::Pwd {
                id_number: p.id_number.clone(),
                disability: p.disability.clone(),
            }
        } else {
            return Err(AppError::Consistency(format!(
                "special-ID discount {} has no senior/pwd detail",
                row.discount_id
            )));
        };
        catalog.push(Discount::SpecialId {
            id: row.discount_id,
            member_id: row.member_id,
            detail,
        });
    }

    catalog.sort_by_key(|d| d.id());
    Ok(catalog)
}

/// Resolve one discount into the tagged union.
pub(crate) async fn resolve(conn: &mut SqliteConnection, discount_id: i64) -> AppResult<Discount> {
    let row = repo::discount::find_row(conn, discount_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Discount {discount_id} not found")))?;

    match row.discount_type.as_str() {
        DISCOUNT_TYPE_INHOUSE => {
            let detail = repo::discount::find_inhouse(conn, discount_id)
                .await?
                .ok_or_else(|| {
                    AppError::Consistency(format!(
                        "in-house discount {discount_id} has no detail row"
                    ))
                })?;
            Ok(Discount::InHouse {
                id: discount_id,
                description: detail.description,
                rate: detail.rate,
            })
        }
        DISCOUNT_TYPE_SPECIAL_ID => {
            let special = repo::discount::find_specialid(conn, discount_id)
                .await?
                .ok_or_else(|| {
                    AppError::Consistency(format!(
                        "special-ID discount {discount_id} has no detail row"
                    ))
                })?;
            let detail = if let Some(s) = repo::discount::find_senior(conn, discount_id).await? {
                SpecialIdDetail::Senior {
                    id_number: s.id_number,
                    birthdate: s.birthdate,
                }
            } else if let Some(p) = repo::discount::find_pwd(conn, discount_id).await? {
                SpecialIdDetail::Pwd {
                    id_number: p.id_number,
                    disability: p.disability,
                }
            } else {
                return Err(AppError::Consistency(format!(
                    "special-ID discount {discount_id} has no senior/pwd detail"
                )));
            };
            Ok(Discount::SpecialId {
                id: discount_id,
                member_id: special.member_id,
                detail,
            })
        }
        other => Err(AppError::Consistency(format!(
            "Discount {discount_id} has unknown type '{other}'"
        ))),
    }
}

/// Applicable rate for a discount selection; `None` means no discount.
pub(crate) async fn resolve_rate(
    conn: &mut SqliteConnection,
    discount_id: Option<i64>,
) -> AppResult<f64> {
    match discount_id {
        None => Ok(0.0),
        Some(id) => Ok(resolve(conn, id).await?.rate()),
    }
}

/// Rate for a discount id, in [0, 1]. Absent selection yields zero.
pub async fn rate_for(pool: &SqlitePool, discount_id: Option<i64>) -> AppResult<f64> {
    let mut conn = pool.acquire().await?;
    resolve_rate(&mut conn, discount_id).await
}

// ── Creation ────────────────────────────────────────────────────────

fn validate_special_id(req: &SpecialIdCreate) -> AppResult<()> {
    validate_required_text(&req.member_id, "member id", MAX_MEMBER_ID_LEN)?;
    validate_required_text(&req.id_number, "ID number", MAX_SPECIAL_ID_LEN)?;
    match req.subtype {
        SpecialIdSubtype::Senior => {
            let birthdate = req.birthdate.as_deref().unwrap_or("");
            if birthdate.trim().is_empty() {
                return Err(AppError::Validation(
                    "a birthdate is required for Senior IDs".into(),
                ));
            }
            parse_date(birthdate)?;
        }
        SpecialIdSubtype::Pwd => {
            let disability = req.disability.as_deref().unwrap_or("");
            validate_required_text(disability, "disability", MAX_DESC_LEN)?;
        }
    }
    Ok(())
}

/// Special-ID creation on an open transaction, for callers that bundle it
/// with further writes (bill generation).
pub(crate) async fn create_special_id_tx(
    conn: &mut SqliteConnection,
    req: &SpecialIdCreate,
) -> AppResult<i64> {
    validate_special_id(req)?;
    if !repo::member::exists(conn, &req.member_id).await? {
        return Err(AppError::NotFound(format!(
            "Member {} not found",
            req.member_id
        )));
    }

    let id = repo::next_id(conn, IdFamily::Discount).await?;
    repo::discount::insert_discount(conn, id, DISCOUNT_TYPE_SPECIAL_ID).await?;
    repo::discount::insert_specialid(conn, id, &req.member_id, SPECIAL_ID_RATE).await?;
    match req.subtype {
        SpecialIdSubtype::Senior => {
            repo::discount::insert_senior(
                conn,
                id,
                &req.id_number,
                req.birthdate.as_deref().unwrap_or_default(),
            )
            .await?
        }
        SpecialIdSubtype::Pwd => {
            repo::discount::insert_pwd(
                conn,
                id,
                &req.id_number,
                req.disability.as_deref().unwrap_or_default(),
            )
            .await?
        }
    }
    Ok(id)
}

/// Create a Senior/PWD discount. The three writes (dispatch row, special-ID
/// record, sub-record) commit or roll back together.
pub async fn create_special_id(pool: &SqlitePool, req: SpecialIdCreate) -> AppResult<i64> {
    let mut tx = pool.begin().await?;
    let id = create_special_id_tx(&mut tx, &req).await?;
    tx.commit().await?;
    tracing::info!(
        discount_id = id,
        subtype = req.subtype.as_str(),
        "Created special-ID discount"
    );
    Ok(id)
}

/// Create an in-house flat-rate discount.
pub async fn create_in_house(pool: &SqlitePool, req: InHouseCreate) -> AppResult<i64> {
    validate_required_text(&req.description, "description", MAX_DESC_LEN)?;
    validate_rate(req.rate, "discount rate")?;

    let mut tx = pool.begin().await?;
    let id = repo::next_id(&mut tx, IdFamily::Discount).await?;
    repo::discount::insert_discount(&mut tx, id, DISCOUNT_TYPE_INHOUSE).await?;
    repo::discount::insert_inhouse(&mut tx, id, &req.description, req.rate).await?;
    tx.commit().await?;

    tracing::info!(discount_id = id, rate = req.rate, "Created in-house discount");
    Ok(id)
}

/// Delete a discount. Refused while any bill still references it; the
/// sub-table rows cascade with the dispatch row.
pub async fn delete_discount(pool: &SqlitePool, discount_id: i64) -> AppResult<bool> {
    let mut tx = pool.begin().await?;
    if repo::discount::find_row(&mut tx, discount_id).await?.is_none() {
        return Ok(false);
    }
    let referencing = repo::bill::count_by_discount(&mut tx, discount_id).await?;
    if referencing > 0 {
        return Err(AppError::Conflict(format!(
            "Discount {discount_id} is referenced by {referencing} bill(s)"
        )));
    }
    let deleted = repo::discount::delete(&mut tx, discount_id).await?;
    tx.commit().await?;

    tracing::info!(discount_id, "Deleted discount");
    Ok(deleted)
}
