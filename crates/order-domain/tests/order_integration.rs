//! Integration tests for the order domain core.
//!
//! These exercise the full flows a caller would drive: creating an order
//! against a restaurant snapshot, paying, approving, and the cancellation
//! paths, including the invariant failures along the way.

use chrono::{DateTime, TimeZone, Utc};
use common::{CustomerId, Money, ProductId, RestaurantId};
use order_domain::{
    Clock, DomainEvent, Order, OrderConfig, OrderDomainError, OrderDomainService, OrderItem,
    OrderStatus, Product, Restaurant, RestaurantConfig, StreetAddress,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy)]
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn event_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn service() -> OrderDomainService<FixedClock> {
    OrderDomainService::with_clock(FixedClock(event_time()))
}

fn active_restaurant(product_id: ProductId, price: Decimal) -> Restaurant {
    Restaurant::new(RestaurantConfig {
        id: RestaurantId::new(),
        products: vec![Product::new(product_id, "Burger", Money::new(price))],
        active: true,
    })
}

fn submitted_order(
    restaurant_id: RestaurantId,
    product_id: ProductId,
    quantity: u32,
    item_price: Decimal,
    total: Decimal,
) -> Order {
    let product = Product::new(product_id, "Burger", Money::new(item_price));
    Order::new(OrderConfig {
        customer_id: CustomerId::new(),
        restaurant_id,
        delivery_address: StreetAddress::new("Main St 1", "10115", "Berlin"),
        price: Money::new(total),
        items: vec![OrderItem::new(product, quantity, Money::new(item_price))],
    })
}

mod order_creation {
    use super::*;

    #[test]
    fn order_against_active_restaurant_is_created() {
        let service = service();
        let product_id = ProductId::new();
        let restaurant = active_restaurant(product_id, dec!(10.00));
        let mut order = submitted_order(restaurant.id(), product_id, 2, dec!(10.00), dec!(20.00));

        let event = service
            .validate_and_initiate_order(&mut order, &restaurant)
            .unwrap();

        assert_eq!(order.status(), Some(OrderStatus::Pending));
        assert!(order.id().is_some());
        assert!(order.tracking_id().is_some());
        assert_eq!(order.items()[0].id().unwrap().value(), 1);
        assert_eq!(event.event_type(), "OrderCreated");
        assert_eq!(event.created_at(), event_time());
    }

    #[test]
    fn inactive_restaurant_aborts_creation() {
        let service = service();
        let product_id = ProductId::new();
        let restaurant = Restaurant::new(RestaurantConfig {
            id: RestaurantId::new(),
            products: vec![Product::new(product_id, "Burger", Money::new(dec!(10.00)))],
            active: false,
        });
        let mut order = submitted_order(restaurant.id(), product_id, 2, dec!(10.00), dec!(20.00));

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant)
            .unwrap_err();

        assert!(err.to_string().contains(&restaurant.id().to_string()));
        assert_eq!(order.status(), None);
    }

    #[test]
    fn total_mismatch_aborts_creation_with_both_amounts() {
        let service = service();
        let product_id = ProductId::new();
        let restaurant = active_restaurant(product_id, dec!(9.50));
        let mut order = submitted_order(restaurant.id(), product_id, 2, dec!(9.50), dec!(20.00));

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant)
            .unwrap_err();

        assert!(matches!(err, OrderDomainError::ItemTotalMismatch { .. }));
        let message = err.to_string();
        assert!(message.contains("20.00"));
        assert!(message.contains("19.00"));
    }

    #[test]
    fn submitted_prices_are_reconciled_before_validation() {
        let service = service();
        let product_id = ProductId::new();
        let restaurant = active_restaurant(product_id, dec!(10.00));

        // Client submitted a stale catalog price on the product; the item
        // price matches the real catalog, so confirmation makes it valid.
        let stale_product = Product::new(product_id, "Burgr", Money::new(dec!(8.00)));
        let mut order = Order::new(OrderConfig {
            customer_id: CustomerId::new(),
            restaurant_id: restaurant.id(),
            delivery_address: StreetAddress::new("Main St 1", "10115", "Berlin"),
            price: Money::new(dec!(20.00)),
            items: vec![OrderItem::new(stale_product, 2, Money::new(dec!(10.00)))],
        });

        service
            .validate_and_initiate_order(&mut order, &restaurant)
            .unwrap();

        assert_eq!(order.items()[0].product().name(), "Burger");
        assert_eq!(order.items()[0].product().price(), Money::new(dec!(10.00)));
    }

    #[test]
    fn sum_of_sub_totals_equals_order_price_after_validation() {
        let service = service();
        let product_id = ProductId::new();
        let restaurant = active_restaurant(product_id, dec!(6.67));
        let mut order = submitted_order(restaurant.id(), product_id, 3, dec!(6.67), dec!(20.01));

        service
            .validate_and_initiate_order(&mut order, &restaurant)
            .unwrap();

        let items_total = order
            .items()
            .iter()
            .fold(Money::ZERO, |acc, item| acc.add(&item.sub_total()));
        assert_eq!(items_total, order.price());
    }
}

mod order_lifecycle {
    use super::*;

    fn created_order(service: &OrderDomainService<FixedClock>) -> Order {
        let product_id = ProductId::new();
        let restaurant = active_restaurant(product_id, dec!(10.00));
        let mut order = submitted_order(restaurant.id(), product_id, 2, dec!(10.00), dec!(20.00));
        service
            .validate_and_initiate_order(&mut order, &restaurant)
            .unwrap();
        order
    }

    #[test]
    fn happy_path_to_approved() {
        let service = service();
        let mut order = created_order(&service);

        let paid = service.pay_order(&mut order).unwrap();
        assert_eq!(paid.event_type(), "OrderPaid");
        assert_eq!(order.status(), Some(OrderStatus::Paid));

        service.approve_order(&mut order).unwrap();
        assert_eq!(order.status(), Some(OrderStatus::Approved));
        assert!(order.status().unwrap().is_terminal());
    }

    #[test]
    fn payment_cancellation_path_to_cancelled() {
        let service = service();
        let mut order = created_order(&service);
        service.pay_order(&mut order).unwrap();

        let cancelled = service
            .cancel_order_payment(&mut order, vec!["restaurant rejected order".to_string()])
            .unwrap();
        assert_eq!(cancelled.event_type(), "OrderCancelled");
        assert_eq!(order.status(), Some(OrderStatus::Cancelling));

        service
            .cancel_order(&mut order, vec!["payment refunded".to_string()])
            .unwrap();
        assert_eq!(order.status(), Some(OrderStatus::Cancelled));
        assert_eq!(
            order.failure_messages(),
            ["restaurant rejected order", "payment refunded"]
        );
    }

    #[test]
    fn pending_order_cancels_directly() {
        let service = service();
        let mut order = created_order(&service);

        service
            .cancel_order(&mut order, vec!["customer changed mind".to_string()])
            .unwrap();
        assert_eq!(order.status(), Some(OrderStatus::Cancelled));
    }

    #[test]
    fn illegal_transitions_leave_status_unchanged() {
        let service = service();
        let mut order = created_order(&service);

        assert!(service.approve_order(&mut order).is_err());
        assert_eq!(order.status(), Some(OrderStatus::Pending));

        service.pay_order(&mut order).unwrap();
        assert!(service.pay_order(&mut order).is_err());
        assert_eq!(order.status(), Some(OrderStatus::Paid));

        service.approve_order(&mut order).unwrap();
        assert!(service.pay_order(&mut order).is_err());
        assert!(service.cancel_order(&mut order, vec![]).is_err());
        assert_eq!(order.status(), Some(OrderStatus::Approved));
    }

    #[test]
    fn events_serialize_for_publication() {
        let service = service();
        let mut order = created_order(&service);
        let event = service.pay_order(&mut order).unwrap();

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(&order.id().unwrap().to_string()));
    }
}
