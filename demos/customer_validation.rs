//! Validates a customer aggregate: four independent checks combined with
//! accumulating semantics, one of which (per-order validation) is itself a
//! dependent fail-fast chain per element. All failures print at once.

use outcome_rail::sequence::validate_each;
use outcome_rail::validators::{greater_than_value, not_equal, required};
use outcome_rail::Outcome;

#[derive(Debug, Clone)]
struct Address {
    postcode: Option<String>,
}

#[derive(Debug, Clone)]
struct Order {
    product_name: Option<String>,
    cost: i32,
}

#[derive(Debug, Clone)]
struct Customer {
    surname: Option<String>,
    address: Address,
    orders: Vec<Order>,
}

fn validate_address(address: &Address) -> Outcome<String, Address> {
    required(address.postcode.clone(), "Post code can't be null".to_string())
        .map(|_| address.clone())
}

fn validate_order(order: &Order) -> Outcome<String, Order> {
    required(
        order.product_name.clone(),
        "Product name can't be null".to_string(),
    )
    .and_then(|name| {
        greater_than_value(
            order.cost,
            0,
            format!("Cost for product '{name}' can't be negative"),
        )
        .map(|_| order.clone())
    })
}

fn validate_customer(customer: &Customer) -> Outcome<String, Customer> {
    required(customer.surname.clone(), "Surname can't be null".to_string())
        .zip(not_equal(
            customer.surname.clone(),
            Some("foo".to_string()),
            "Surname can't be foo".to_string(),
        ))
        .zip(validate_address(&customer.address))
        .zip(validate_each(customer.orders.iter().cloned(), |order| {
            validate_order(&order)
        }))
        .map(|_| customer.clone())
}

fn main() {
    let customer = Customer {
        surname: None,
        address: Address {
            postcode: Some("1424".to_string()),
        },
        orders: vec![
            Order {
                product_name: Some("Foo".to_string()),
                cost: 5,
            },
            Order {
                product_name: Some("Bar".to_string()),
                cost: -1,
            },
            Order {
                product_name: None,
                cost: -1,
            },
        ],
    };

    validate_customer(&customer).fold(
        |customer| println!("valid customer: {customer:?}"),
        |messages| {
            for message in messages {
                println!("Error: {message}");
            }
        },
    );
}
