use serde::{Deserialize, Serialize};

/// 計費方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTiming {
    Prepaid,
    Postpaid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_length: u32,
    /// 目前服務端只接受 `month`
    pub reservation_time_unit: String,
}

impl Reservation {
    pub fn months(length: u32) -> Self {
        Self {
            reservation_length: length,
            reservation_time_unit: "month".to_string(),
        }
    }
}

/// Billing block shared by resources that can be prepaid or postpaid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_timing: Option<PaymentTiming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<Reservation>,
}

impl Billing {
    pub fn postpaid() -> Self {
        Self {
            payment_timing: Some(PaymentTiming::Postpaid),
            reservation: None,
        }
    }

    pub fn prepaid(months: u32) -> Self {
        Self {
            payment_timing: Some(PaymentTiming::Prepaid),
            reservation: Some(Reservation::months(months)),
        }
    }
}
