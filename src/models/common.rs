use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Patch: unset / null / value
// ---------------------------------------------------------------------------

/// A field of an update payload.
///
/// `Unset` is left out of the request body, `Null` is sent as JSON `null`
/// and `Set` sends the value. Use with
/// `#[serde(default, skip_serializing_if = "Patch::is_unset")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Null,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Patch::Set(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Set(v) => serializer.serialize_some(v),
            Patch::Unset | Patch::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Set(v),
            None => Patch::Null,
        })
    }
}

// ---------------------------------------------------------------------------
// Rates and memberships
// ---------------------------------------------------------------------------

/// Amount in the smallest currency unit (cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Rate>,
    pub membership_status: String,
    pub membership_type: String,
    pub target_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyRateRequest {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

impl HourlyRateRequest {
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            since: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_as_instant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<HourlyRateRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_status: Option<MembershipStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<MembershipType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    Pending,
    Active,
    Declined,
    Inactive,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipType {
    Workspace,
    Project,
    Usergroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    struct Update {
        #[serde(default, skip_serializing_if = "Patch::is_unset")]
        note: Patch<String>,
        #[serde(default, skip_serializing_if = "Patch::is_unset")]
        billable: Patch<bool>,
    }

    #[test]
    fn patch_distinguishes_unset_null_and_value() {
        let unset = Update::default();
        assert_eq!(serde_json::to_value(&unset).unwrap(), json!({}));

        let cleared = Update {
            note: Patch::Null,
            billable: false.into(),
        };
        assert_eq!(
            serde_json::to_value(&cleared).unwrap(),
            json!({"note": null, "billable": false})
        );
    }

    #[test]
    fn patch_decodes_missing_as_unset() {
        let decoded: Update = serde_json::from_value(json!({"note": null})).unwrap();
        assert_eq!(decoded.note, Patch::Null);
        assert_eq!(decoded.billable, Patch::Unset);
        assert_eq!(decoded.billable.as_option(), None);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        assert_eq!(
            serde_json::from_value::<MembershipStatus>(json!("DECLINED")).unwrap(),
            MembershipStatus::Declined
        );
        assert!(serde_json::from_value::<MembershipStatus>(json!("SUSPENDED")).is_err());
    }

    #[test]
    fn membership_tolerates_missing_rates() {
        let m: Membership = serde_json::from_value(json!({
            "costRate": null,
            "membershipStatus": "ACTIVE",
            "membershipType": "WORKSPACE",
            "targetId": "t1",
            "userId": "u1"
        }))
        .unwrap();
        assert!(m.cost_rate.is_none());
        assert!(m.hourly_rate.is_none());
    }
}
