//! Restaurant Module
//!
//! Data structures for the restaurant collections:
//!
//! - `Food` - A dish on a menu
//! - `Menu` - A dated menu grouping foods
//! - `Table` - A dining table
//! - `Order` - An order placed at a table
//! - `OrderItem` - One line of an order
//! - `Invoice` - Payment record for an order
//!
//! Each entity comes with a `New*` request (validated on create) and an
//! `*Update` request whose fields are all optional.

pub mod food;
pub mod menu;
pub mod table;
pub mod order;
pub mod order_item;
pub mod invoice;

pub use food::{Food, FoodUpdate, NewFood};
pub use menu::{Menu, MenuUpdate, NewMenu};
pub use table::{NewTable, Table, TableUpdate};
pub use order::{NewOrder, Order, OrderUpdate};
pub use order_item::{NewOrderItem, OrderItem, OrderItemUpdate};
pub use invoice::{Invoice, InvoiceUpdate, NewInvoice};
