/**
 * Gated API Routes
 *
 * Every route registered here runs behind `auth_gate`, attached with
 * `route_layer` so unmatched paths still fall through to a plain 404.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};

use crate::backend::auth::handlers::{get_user, get_users};
use crate::backend::middleware::auth_gate;
use crate::backend::restaurant::{foods, invoices, menus, order_items, orders, tables};
use crate::backend::server::state::AppState;

/// Configure the gated API routes
///
/// # Routes
///
/// - `/users`, `/users/{user_id}`
/// - `/foods`, `/foods/{food_id}`
/// - `/menus`, `/menus/{menu_id}`
/// - `/tables`, `/tables/{table_id}`
/// - `/orders`, `/orders/{order_id}`
/// - `/order_items`, `/order_items/{order_item_id}`, `/orderItems-order/{order_id}`
/// - `/invoices`, `/invoices/{invoice_id}`
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/users/{user_id}", get(get_user))
        .route("/foods", get(foods::list_foods).post(foods::create_food))
        .route(
            "/foods/{food_id}",
            get(foods::get_food)
                .patch(foods::update_food)
                .delete(foods::delete_food),
        )
        .route("/menus", get(menus::list_menus).post(menus::create_menu))
        .route(
            "/menus/{menu_id}",
            get(menus::get_menu)
                .patch(menus::update_menu)
                .delete(menus::delete_menu),
        )
        .route("/tables", get(tables::list_tables).post(tables::create_table))
        .route(
            "/tables/{table_id}",
            get(tables::get_table)
                .patch(tables::update_table)
                .delete(tables::delete_table),
        )
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/{order_id}",
            get(orders::get_order)
                .patch(orders::update_order)
                .delete(orders::delete_order),
        )
        .route(
            "/order_items",
            get(order_items::list_order_items).post(order_items::create_order_item),
        )
        .route(
            "/order_items/{order_item_id}",
            get(order_items::get_order_item)
                .patch(order_items::update_order_item)
                .delete(order_items::delete_order_item),
        )
        .route(
            "/orderItems-order/{order_id}",
            get(order_items::list_order_items_by_order),
        )
        .route(
            "/invoices",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/invoices/{invoice_id}",
            get(invoices::get_invoice)
                .patch(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
        .route_layer(from_fn_with_state(state, auth_gate))
}
