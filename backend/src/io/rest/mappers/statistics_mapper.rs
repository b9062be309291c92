use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::StatisticsResponse;

use crate::domain::models::Statistics;

pub struct StatisticsMapper;

impl StatisticsMapper {
    pub fn to_dto(domain: &Statistics) -> StatisticsResponse {
        StatisticsResponse {
            sum: Self::to_number(domain.sum),
            avg: Self::to_number(domain.avg),
            max: Self::to_number(domain.max),
            min: Self::to_number(domain.min),
            count: domain.count,
        }
    }

    fn to_number(value: Decimal) -> f64 {
        value.to_f64().unwrap_or_default()
    }
}
