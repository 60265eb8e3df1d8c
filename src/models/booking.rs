use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Laundry,
    Ironing,
    DryCleaning,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceType::Laundry => "laundry",
            ServiceType::Ironing => "ironing",
            ServiceType::DryCleaning => "dry-cleaning",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Upi,
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PickedUp,
    InProcess,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    // position in the pickup-to-delivery progression, 0-based
    pub fn step_index(&self) -> usize {
        match self {
            OrderStatus::PickedUp => 0,
            OrderStatus::InProcess => 1,
            OrderStatus::OutForDelivery => 2,
            OrderStatus::Delivered => 3,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::PickedUp => "PICKED_UP",
            OrderStatus::InProcess => "IN_PROCESS",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
        };
        f.write_str(label)
    }
}

// The backend hands out numeric ids but the client never does arithmetic on
// them, so they stay opaque strings here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderId(pub String);

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(OrderId(s)),
            serde_json::Value::Number(n) => Ok(OrderId(n.to_string())),
            other => Err(D::Error::custom(format!(
                "orderId must be a string or number, got {other}"
            ))),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub service_type: ServiceType,
    pub items: u32,
    pub express_service: bool,
    pub pickup_date: NaiveDate,
    #[serde(with = "time_hm")]
    pub pickup_time: NaiveTime,
    pub address: String,
    pub phone: String,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    pub order_id: OrderId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub service_type: ServiceType,
    pub items: u32,
    pub pickup_date: NaiveDate,
    pub status: OrderStatus,
}

// Raw form input, one string per field. Parsing stands in for the native
// input constraints the browser form enforced.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub service_type: String,
    pub items: String,
    pub express_service: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
}

impl BookingForm {
    pub fn parse(&self) -> Result<BookingRequest, ClientError> {
        let service_type = match self.service_type.trim() {
            "laundry" => ServiceType::Laundry,
            "ironing" => ServiceType::Ironing,
            "dry-cleaning" => ServiceType::DryCleaning,
            other => {
                return Err(ClientError::Validation(format!(
                    "unknown service type: {other:?}"
                )));
            }
        };

        let items: u32 = self
            .items
            .trim()
            .parse()
            .map_err(|_| ClientError::Validation("items must be a number".to_string()))?;
        if items == 0 {
            return Err(ClientError::Validation(
                "items must be greater than zero".to_string(),
            ));
        }

        let pickup_date = NaiveDate::parse_from_str(self.pickup_date.trim(), "%Y-%m-%d")
            .map_err(|_| {
                ClientError::Validation("pickup date must be YYYY-MM-DD".to_string())
            })?;
        let pickup_time = NaiveTime::parse_from_str(self.pickup_time.trim(), "%H:%M")
            .map_err(|_| ClientError::Validation("pickup time must be HH:MM".to_string()))?;

        let address = self.address.trim();
        if address.is_empty() {
            return Err(ClientError::Validation("address is required".to_string()));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ClientError::Validation("phone is required".to_string()));
        }

        let payment_method = match self.payment_method.trim() {
            "cash" => PaymentMethod::Cash,
            "upi" => PaymentMethod::Upi,
            "card" => PaymentMethod::Card,
            other => {
                return Err(ClientError::Validation(format!(
                    "unknown payment method: {other:?}"
                )));
            }
        };

        Ok(BookingRequest {
            service_type,
            items,
            express_service: self.express_service.trim().eq_ignore_ascii_case("true"),
            pickup_date,
            pickup_time,
            address: address.to_string(),
            phone: phone.to_string(),
            payment_method,
        })
    }
}

// The backend parses pickup times with a strict %H:%M format, so the default
// chrono %H:%M:%S serialization would be rejected.
mod time_hm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M").map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        BookingForm {
            service_type: "laundry".to_string(),
            items: "5".to_string(),
            express_service: "true".to_string(),
            pickup_date: "2026-09-01".to_string(),
            pickup_time: "14:30".to_string(),
            address: "12 Spin Cycle Lane".to_string(),
            phone: "555-0199".to_string(),
            payment_method: "upi".to_string(),
        }
    }

    #[test]
    fn filled_form_parses() {
        let request = filled_form().parse().unwrap();
        assert_eq!(request.service_type, ServiceType::Laundry);
        assert_eq!(request.items, 5);
        assert!(request.express_service);
        assert_eq!(request.payment_method, PaymentMethod::Upi);
    }

    #[test]
    fn booking_request_serializes_items_as_number() {
        let request = filled_form().parse().unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["items"].is_number());
        assert_eq!(value["serviceType"], "laundry");
        assert_eq!(value["pickupDate"], "2026-09-01");
        assert_eq!(value["pickupTime"], "14:30");
        assert_eq!(value["paymentMethod"], "upi");
        assert_eq!(value["expressService"], true);
    }

    #[test]
    fn non_numeric_items_is_rejected() {
        let mut form = filled_form();
        form.items = "a few".to_string();
        let err = form.parse().unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn zero_items_is_rejected() {
        let mut form = filled_form();
        form.items = "0".to_string();
        assert!(form.parse().is_err());
    }

    #[test]
    fn malformed_time_is_rejected() {
        let mut form = filled_form();
        form.pickup_time = "2pm".to_string();
        assert!(form.parse().is_err());
    }

    #[test]
    fn empty_address_is_rejected() {
        let mut form = filled_form();
        form.address = "   ".to_string();
        assert!(form.parse().is_err());
    }

    #[test]
    fn order_id_deserializes_from_number_or_string() {
        let from_number: OrderId = serde_json::from_str("42").unwrap();
        assert_eq!(from_number, OrderId("42".to_string()));

        let from_string: OrderId = serde_json::from_str("\"LP-42\"").unwrap();
        assert_eq!(from_string, OrderId("LP-42".to_string()));
    }

    #[test]
    fn order_deserializes_backend_shape() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "orderId": 7,
            "serviceType": "dry-cleaning",
            "items": 3,
            "expressService": false,
            "pickupDate": "2026-09-02",
            "pickupTime": "09:00",
            "address": "12 Spin Cycle Lane",
            "phone": "555-0199",
            "paymentMethod": "card",
            "status": "OUT_FOR_DELIVERY"
        }))
        .unwrap();

        assert_eq!(order.order_id.0, "7");
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.status.step_index(), 2);
    }
}
