//! Member entity and role types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::MemberId;

/// Role of a platform member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum MemberRole {
    /// Platform administrator.
    Admin = 1,
    /// Student who enrolls in courses.
    Student = 2,
    /// Teacher who owns courses.
    Teacher = 3,
}

impl MemberRole {
    /// Return the database representation of the role.
    pub const fn as_i16(self) -> i16 {
        self as i16
    }

    /// Parse a role from its database representation.
    pub const fn from_i16(raw: i16) -> Option<Self> {
        match raw {
            1 => Some(Self::Admin),
            2 => Some(Self::Student),
            3 => Some(Self::Teacher),
            _ => None,
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl sqlx::Type<sqlx::Postgres> for MemberRole {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i16 as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

#[cfg(feature = "sqlx-support")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for MemberRole {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i16 as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_i16(), buf)
    }
}

#[cfg(feature = "sqlx-support")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for MemberRole {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <i16 as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Self::from_i16(raw).ok_or_else(|| format!("invalid member role: {raw}").into())
    }
}

/// A member row as stored in the backing database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Member {
    /// Primary key.
    pub member_id: MemberId,
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub nickname: String,
    /// Member role.
    pub role: MemberRole,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
