//! Order Repository

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{LineItem, Order, OrderCreate, OrderStatus};
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult, is_write_conflict};
use crate::db::{Database, ORDERS};

const ORDER_FIELDS: &str = "record::id(id) AS id, customerName, phoneNumber, address, \
     paymentMethod, upiScreenshot, orderDate, status, products, total";

/// Stored document (the UUID lives in the record key)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderDocument {
    customer_name: String,
    phone_number: String,
    address: String,
    payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    upi_screenshot: Option<String>,
    order_date: DateTime<Utc>,
    status: OrderStatus,
    products: Vec<LineItem>,
    total: f64,
}

impl OrderDocument {
    fn into_order(self, id: String) -> Order {
        Order {
            id,
            customer_name: self.customer_name,
            phone_number: self.phone_number,
            address: self.address,
            payment_method: self.payment_method,
            upi_screenshot: self.upi_screenshot,
            order_date: self.order_date,
            status: self.status,
            products: self.products,
            total: self.total,
        }
    }
}

/// Only the status is read back after a conditional update
#[derive(Debug, Deserialize)]
struct StatusRow {
    status: OrderStatus,
}

// =============================================================================
// Order Repository
// =============================================================================

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Database) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All orders in storage order (UUIDv7 keys, so oldest first)
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(format!("SELECT {} FROM type::table($table)", ORDER_FIELDS))
            .bind(("table", ORDERS))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by its UUID
    pub async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self
            .base
            .db()
            .query(format!("SELECT {} FROM type::thing($table, $id)", ORDER_FIELDS))
            .bind(("table", ORDERS))
            .bind(("id", id.to_string()))
            .await?
            .take(0)?;
        Ok(order)
    }

    /// Store a new order; it always starts as `Pending`
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let id = Uuid::now_v7().to_string();
        let doc = OrderDocument {
            customer_name: data.customer_name,
            phone_number: data.phone_number,
            address: data.address,
            payment_method: data.payment_method,
            upi_screenshot: data.upi_screenshot,
            order_date: data.order_date.unwrap_or_else(Utc::now),
            status: OrderStatus::Pending,
            products: data.products,
            total: data.total,
        };

        self.base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", ORDERS))
            .bind(("id", id.clone()))
            .bind(("data", doc.clone()))
            .await?
            .check()?;

        Ok(doc.into_order(id))
    }

    /// Move an order to `next`
    ///
    /// The write only applies if the status is still the one the transition
    /// was checked against, so concurrent updates cannot both win.
    pub async fn update_status(&self, id: Uuid, next: OrderStatus) -> RepoResult<Order> {
        let mut order = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {}", id)))?;

        let current = order.status;
        if current == next {
            return Ok(order);
        }
        if !current.can_transition_to(next) {
            return Err(RepoError::Conflict(format!(
                "Cannot change order status from {} to {}",
                current, next
            )));
        }

        let result = self
            .base
            .db()
            .query(
                "UPDATE type::thing($table, $id) SET status = $next \
                 WHERE status = $current RETURN AFTER",
            )
            .bind(("table", ORDERS))
            .bind(("id", id.to_string()))
            .bind(("next", next))
            .bind(("current", current))
            .await
            .and_then(|mut response| response.take::<Vec<StatusRow>>(0));

        // 并发写同一订单：要么 WHERE 不再命中，要么事务提交冲突，都算输家
        let lost_race = || {
            RepoError::Conflict(format!(
                "Order {} was modified concurrently, status is no longer {}",
                id, current
            ))
        };

        match result {
            Ok(updated) => match updated.into_iter().next() {
                Some(row) => {
                    order.status = row.status;
                    Ok(order)
                }
                None => Err(lost_race()),
            },
            Err(e) if is_write_conflict(&e) => {
                tracing::debug!(order_id = %id, error = %e, "Status update lost a write conflict");
                Err(lost_race())
            }
            Err(e) => Err(e.into()),
        }
    }
}
