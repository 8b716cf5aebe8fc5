use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use ia_schemas::{
    Article, Coupon, Entity, EntityKind, Intent, RdCheckout, Store, StoreManager, User,
};

use crate::FormError;

/// Text format of date-time inputs (minute precision, UTC).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Conversion between a kind and the values its form controls hold.
pub trait FormModel: EntityKind {
    type Raw: Clone + fmt::Debug + PartialEq;

    /// Field values of a blank create form.
    fn form_defaults(_now: DateTime<Utc>) -> Self {
        Self::default()
    }

    fn to_raw(&self) -> Self::Raw;

    fn from_raw(raw: Self::Raw) -> Result<Self, FormError>;
}

macro_rules! plain_form_model {
    ($($kind:ty),* $(,)?) => {
        $(
            impl FormModel for $kind {
                type Raw = $kind;

                fn to_raw(&self) -> Self::Raw {
                    self.clone()
                }

                fn from_raw(raw: Self::Raw) -> Result<Self, FormError> {
                    Ok(raw)
                }
            }
        )*
    };
}

plain_form_model!(Article, Coupon, Store, StoreManager, RdCheckout, User);

/// Intent form values. Date-times are text in `DATE_TIME_FORMAT`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentFormRaw {
    pub commission: Option<f64>,
    pub created_time: Option<String>,
    pub created_by: Option<String>,
    pub updated_time: Option<String>,
    pub updated_by: Option<String>,
    pub article: Option<Entity<Article>>,
    pub user: Option<Entity<User>>,
    pub store_manager: Option<Entity<StoreManager>>,
    pub store: Option<Entity<Store>>,
    pub coupon: Option<Entity<Coupon>>,
    pub rd_checkout: Option<Entity<RdCheckout>>,
}

impl FormModel for Intent {
    type Raw = IntentFormRaw;

    fn form_defaults(now: DateTime<Utc>) -> Self {
        Intent {
            created_time: Some(now),
            updated_time: Some(now),
            ..Intent::default()
        }
    }

    fn to_raw(&self) -> Self::Raw {
        IntentFormRaw {
            commission: self.commission,
            created_time: self.created_time.map(format_date_time),
            created_by: self.created_by.clone(),
            updated_time: self.updated_time.map(format_date_time),
            updated_by: self.updated_by.clone(),
            article: self.article.clone(),
            user: self.user.clone(),
            store_manager: self.store_manager.clone(),
            store: self.store.clone(),
            coupon: self.coupon.clone(),
            rd_checkout: self.rd_checkout.clone(),
        }
    }

    fn from_raw(raw: Self::Raw) -> Result<Self, FormError> {
        Ok(Intent {
            commission: raw.commission,
            created_time: parse_date_time("createdTime", raw.created_time.as_deref())?,
            created_by: raw.created_by,
            updated_time: parse_date_time("updatedTime", raw.updated_time.as_deref())?,
            updated_by: raw.updated_by,
            article: raw.article,
            user: raw.user,
            store_manager: raw.store_manager,
            store: raw.store,
            coupon: raw.coupon,
            rd_checkout: raw.rd_checkout,
        })
    }
}

fn format_date_time(ts: DateTime<Utc>) -> String {
    ts.format(DATE_TIME_FORMAT).to_string()
}

/// Empty text counts as absent.
fn parse_date_time(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, FormError> {
    let s = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };

    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| FormError::InvalidDateTime {
            field,
            value: s.to_string(),
        })
}
