//! Closing order domain types
//!
//! This module defines the order aggregate and its six sub-collections.
//! An order is treated as an immutable snapshot: every mutation computes a
//! new `Order` value which the store publishes wholesale under the order id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for orders.
///
/// Ids are allocated by the store from a process-wide monotonic counter and
/// are never reused or mutated once assigned.
pub type OrderId = u64;

/// The id counter seed. The first order created gets `DEFAULT_ID_SEED + 1`,
/// keeping the low id range reserved for fixture data.
pub const DEFAULT_ID_SEED: u64 = 4999;

/// A party to the closing (buyer, seller, lender, attorney, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Party role, e.g. "buyer" or "seller". Upsert key.
    #[serde(rename = "type")]
    pub party_type: String,
    pub name: String,
}

/// A service engaged for the closing (Escrow, Title, Both).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service category. Upsert key.
    #[serde(rename = "type")]
    pub service_type: String,
}

/// A charge against the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Upsert key.
    pub description: String,
    pub amount: f64,
}

/// A deposit held against the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    /// Upsert key.
    pub description: String,
    pub amount: f64,
}

/// A loan funding the transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Upsert key.
    pub lender: String,
    pub amount: f64,
}

/// A fee collected at closing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    /// Upsert key.
    pub description: String,
    pub amount: f64,
}

/// A sub-entity with a designated key field used for upsert deduplication.
///
/// Keys are compared case-insensitively; within one order's sub-collection
/// no two elements share a key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Party {
    fn key(&self) -> &str {
        &self.party_type
    }
}

impl Keyed for Service {
    fn key(&self) -> &str {
        &self.service_type
    }
}

impl Keyed for Charge {
    fn key(&self) -> &str {
        &self.description
    }
}

impl Keyed for Deposit {
    fn key(&self) -> &str {
        &self.description
    }
}

impl Keyed for Loan {
    fn key(&self) -> &str {
        &self.lender
    }
}

impl Keyed for Fee {
    fn key(&self) -> &str {
        &self.description
    }
}

/// A proposed element for one of the six sub-collections.
///
/// For parties the upsert key comes from the request path (the addressable
/// party sub-resource), so it is carried separately from the element body.
#[derive(Debug, Clone)]
pub enum OrderElement {
    Party { key: String, party: Party },
    Service(Service),
    Charge(Charge),
    Deposit(Deposit),
    Loan(Loan),
    Fee(Fee),
}

impl OrderElement {
    /// Name of the sub-collection this element targets, for logging.
    pub fn collection(&self) -> &'static str {
        match self {
            OrderElement::Party { .. } => "parties",
            OrderElement::Service(_) => "services",
            OrderElement::Charge(_) => "charges",
            OrderElement::Deposit(_) => "deposits",
            OrderElement::Loan(_) => "loans",
            OrderElement::Fee(_) => "fees",
        }
    }
}

/// A closing order aggregate: header fields plus six optional ordered
/// sub-collections.
///
/// A sub-collection absent (`None`) means it was never populated; after any
/// upsert it becomes a present sequence. Header fields are immutable after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub organization: String,
    /// Transaction category, e.g. "Sale with Mortgage", "Refinance".
    pub transaction_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parties: Option<Vec<Party>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charges: Option<Vec<Charge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposits: Option<Vec<Deposit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loans: Option<Vec<Loan>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Vec<Fee>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build the initial snapshot for a freshly allocated id.
    pub fn new(id: OrderId, new_order: NewOrder) -> Self {
        let now = Utc::now();
        Self {
            id,
            organization: new_order.organization,
            transaction_type: new_order.transaction_type,
            parties: new_order.parties,
            services: new_order.services,
            charges: new_order.charges,
            deposits: new_order.deposits,
            loans: new_order.loans,
            fees: new_order.fees,
            created_at: now,
            updated_at: now,
        }
    }

    /// Produce the next snapshot with `element` upserted into its
    /// sub-collection.
    ///
    /// Every existing element whose key matches case-insensitively is
    /// removed, then the proposed element is appended. The caller owns
    /// publishing the returned snapshot atomically.
    pub fn with_element(mut self, element: OrderElement) -> Self {
        match element {
            OrderElement::Party { key, party } => {
                self.parties = Some(replace_by_key(self.parties.take(), &key, party));
            }
            OrderElement::Service(service) => {
                let key = service.key().to_owned();
                self.services = Some(replace_by_key(self.services.take(), &key, service));
            }
            OrderElement::Charge(charge) => {
                let key = charge.key().to_owned();
                self.charges = Some(replace_by_key(self.charges.take(), &key, charge));
            }
            OrderElement::Deposit(deposit) => {
                let key = deposit.key().to_owned();
                self.deposits = Some(replace_by_key(self.deposits.take(), &key, deposit));
            }
            OrderElement::Loan(loan) => {
                let key = loan.key().to_owned();
                self.loans = Some(replace_by_key(self.loans.take(), &key, loan));
            }
            OrderElement::Fee(fee) => {
                let key = fee.key().to_owned();
                self.fees = Some(replace_by_key(self.fees.take(), &key, fee));
            }
        }
        self.updated_at = Utc::now();
        self
    }
}

/// Remove all elements matching `key` (case-insensitive) and append
/// `element` at the end. At most one element should ever match given the
/// key-uniqueness invariant, but removal is defined over all matches.
fn replace_by_key<T: Keyed>(existing: Option<Vec<T>>, key: &str, element: T) -> Vec<T> {
    let mut items = existing.unwrap_or_default();
    items.retain(|item| !item.key().eq_ignore_ascii_case(key));
    items.push(element);
    items
}

/// Header fields and optional initial sub-collections for a new order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub organization: String,
    pub transaction_type: String,
    #[serde(default)]
    pub parties: Option<Vec<Party>>,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
    #[serde(default)]
    pub charges: Option<Vec<Charge>>,
    #[serde(default)]
    pub deposits: Option<Vec<Deposit>>,
    #[serde(default)]
    pub loans: Option<Vec<Loan>>,
    #[serde(default)]
    pub fees: Option<Vec<Fee>>,
}

impl NewOrder {
    pub fn new(organization: impl Into<String>, transaction_type: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            transaction_type: transaction_type.into(),
            ..Default::default()
        }
    }

    /// Presence check for the required header fields.
    pub fn validate(&self) -> Result<(), String> {
        if self.organization.trim().is_empty() {
            return Err("organization is required".to_string());
        }
        if self.transaction_type.trim().is_empty() {
            return Err("transactionType is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new_carries_header_and_collections() {
        let mut new_order = NewOrder::new("AcmeTitle", "Sale with Cash");
        new_order.services = Some(vec![Service {
            service_type: "Escrow".to_string(),
        }]);

        let order = Order::new(5000, new_order);

        assert_eq!(order.id, 5000);
        assert_eq!(order.organization, "AcmeTitle");
        assert_eq!(order.transaction_type, "Sale with Cash");
        assert_eq!(order.services.as_ref().map(Vec::len), Some(1));
        assert!(order.parties.is_none());
    }

    #[test]
    fn test_with_element_populates_absent_collection() {
        let order = Order::new(5000, NewOrder::new("AcmeTitle", "Refinance"));
        assert!(order.charges.is_none());

        let order = order.with_element(OrderElement::Charge(Charge {
            description: "Recording fee".to_string(),
            amount: 125.0,
        }));

        let charges = order.charges.expect("charges present after upsert");
        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].description, "Recording fee");
    }

    #[test]
    fn test_with_element_replaces_case_insensitively() {
        let order = Order::new(5000, NewOrder::new("AcmeTitle", "Refinance"))
            .with_element(OrderElement::Charge(Charge {
                description: "Tax".to_string(),
                amount: 100.0,
            }))
            .with_element(OrderElement::Charge(Charge {
                description: "tax".to_string(),
                amount: 250.0,
            }));

        let charges = order.charges.unwrap();
        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].description, "tax");
        assert_eq!(charges[0].amount, 250.0);
    }

    #[test]
    fn test_with_element_preserves_unrelated_keys() {
        let order = Order::new(5000, NewOrder::new("AcmeTitle", "Refinance"))
            .with_element(OrderElement::Loan(Loan {
                lender: "First National".to_string(),
                amount: 300_000.0,
            }))
            .with_element(OrderElement::Loan(Loan {
                lender: "Second Street Credit".to_string(),
                amount: 50_000.0,
            }))
            .with_element(OrderElement::Loan(Loan {
                lender: "FIRST NATIONAL".to_string(),
                amount: 295_000.0,
            }));

        let loans = order.loans.unwrap();
        assert_eq!(loans.len(), 2);
        // Replaced element moves to the end, the untouched one keeps its slot.
        assert_eq!(loans[0].lender, "Second Street Credit");
        assert_eq!(loans[1].lender, "FIRST NATIONAL");
        assert_eq!(loans[1].amount, 295_000.0);
    }

    #[test]
    fn test_party_upsert_key_comes_from_path() {
        // The stored body keeps its own casing; removal matches the path key.
        let order = Order::new(5000, NewOrder::new("AcmeTitle", "Sale with Mortgage"))
            .with_element(OrderElement::Party {
                key: "buyer".to_string(),
                party: Party {
                    party_type: "Buyer".to_string(),
                    name: "Jordan Fields".to_string(),
                },
            })
            .with_element(OrderElement::Party {
                key: "BUYER".to_string(),
                party: Party {
                    party_type: "buyer".to_string(),
                    name: "Avery Cole".to_string(),
                },
            });

        let parties = order.parties.unwrap();
        assert_eq!(parties.len(), 1);
        assert_eq!(parties[0].name, "Avery Cole");
    }

    #[test]
    fn test_new_order_validation() {
        assert!(NewOrder::new("AcmeTitle", "Refinance").validate().is_ok());
        assert!(NewOrder::new("", "Refinance").validate().is_err());
        assert!(NewOrder::new("   ", "Refinance").validate().is_err());
        assert!(NewOrder::new("AcmeTitle", " ").validate().is_err());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new(5000, NewOrder::new("AcmeTitle", "Sale with Cash"));
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["transactionType"], "Sale with Cash");
        assert_eq!(json["id"], 5000);
        // Absent collections stay off the wire entirely.
        assert!(json.get("parties").is_none());
    }

    #[test]
    fn test_sub_entity_wire_field_names() {
        let party: Party = serde_json::from_str(r#"{"type":"buyer","name":"Jo"}"#).unwrap();
        assert_eq!(party.party_type, "buyer");

        let service = Service {
            service_type: "Escrow".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&service).unwrap(),
            r#"{"type":"Escrow"}"#
        );
    }
}
