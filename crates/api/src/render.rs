//! HTML rendering of workflow pages.

use std::fmt::Write as _;

use stockroom_products::{Field, ProductForm};

use crate::workflows::{LIST_PATH, Page};

/// Turns a page (view + context) into a response body.
pub trait Renderer: Send + Sync {
    fn render(&self, page: &Page) -> String;

    fn not_found(&self) -> String;

    fn server_error(&self) -> String;
}

/// Minimal built-in HTML renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, page: &Page) -> String {
        let (title, body) = match page {
            Page::ProductList { products } => {
                let mut body = String::new();
                let _ = writeln!(body, "<h1>Products</h1>");
                let _ = writeln!(body, r#"<p><a href="{LIST_PATH}/new">Add product</a></p>"#);
                if products.is_empty() {
                    body.push_str("<p>No products yet.</p>\n");
                } else {
                    body.push_str(
                        "<table>\n<tr><th>Name</th><th>Description</th><th>Price</th><th>Quantity</th><th></th></tr>\n",
                    );
                    for p in products {
                        let _ = writeln!(
                            body,
                            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href="{LIST_PATH}/{id}/edit">Edit</a> <a href="{LIST_PATH}/{id}/delete">Delete</a></td></tr>"#,
                            escape(p.name()),
                            escape(p.description()),
                            p.price(),
                            p.quantity(),
                            id = p.id_typed(),
                        );
                    }
                    body.push_str("</table>\n");
                }
                ("Products", body)
            }
            Page::ProductForm { form } => {
                let title = if form.instance_id().is_some() { "Edit product" } else { "Add product" };
                (title, render_form(title, form))
            }
            Page::ProductConfirmDelete { product } => {
                let mut body = String::new();
                let _ = writeln!(body, "<h1>Delete product</h1>");
                let _ = writeln!(
                    body,
                    "<p>Are you sure you want to delete &quot;{}&quot;?</p>",
                    escape(product.name())
                );
                let _ = writeln!(
                    body,
                    r#"<form method="post" action="{LIST_PATH}/{}/delete"><button type="submit">Confirm</button> <a href="{LIST_PATH}">Cancel</a></form>"#,
                    product.id_typed()
                );
                ("Delete product", body)
            }
        };
        layout(title, &body)
    }

    fn not_found(&self) -> String {
        layout("Not found", "<h1>Not found</h1>\n<p>The requested product does not exist.</p>\n")
    }

    fn server_error(&self) -> String {
        layout("Server error", "<h1>Server error</h1>\n<p>Something went wrong.</p>\n")
    }
}

fn render_form(title: &str, form: &ProductForm) -> String {
    let action = match form.instance_id() {
        Some(id) => format!("{LIST_PATH}/{id}/edit"),
        None => format!("{LIST_PATH}/new"),
    };

    let mut body = String::new();
    let _ = writeln!(body, "<h1>{title}</h1>");
    let _ = writeln!(body, r#"<form method="post" action="{action}">"#);
    for field in Field::ALL {
        let name = field.as_str();
        let value = escape(form.value(field));
        let _ = writeln!(body, "<p>");
        let _ = writeln!(body, r#"<label for="id_{name}">{}:</label>"#, field.label());
        let messages = form.errors().get(field);
        if !messages.is_empty() {
            body.push_str(r#"<ul class="errorlist">"#);
            for message in messages {
                let _ = write!(body, "<li>{}</li>", escape(message));
            }
            body.push_str("</ul>\n");
        }
        let _ = match field {
            Field::Description => writeln!(
                body,
                r#"<textarea id="id_{name}" name="{name}">{value}</textarea>"#
            ),
            _ => writeln!(
                body,
                r#"<input id="id_{name}" name="{name}" value="{value}">"#
            ),
        };
        let _ = writeln!(body, "</p>");
    }
    let _ = writeln!(body, r#"<button type="submit">Save</button> <a href="{LIST_PATH}">Cancel</a>"#);
    body.push_str("</form>\n");
    body
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{body}</body>\n</html>\n",
        escape(title)
    )
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
