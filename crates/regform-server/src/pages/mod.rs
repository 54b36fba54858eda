//! Maud page templates.

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

pub mod form;
pub mod success;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";
const TAILWIND_SRC: &str = "https://cdn.tailwindcss.com";

/// Full HTML document around `body`
pub fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(TAILWIND_SRC) {}
                script src=(HTMX_SRC) {}
            }
            body class="bg-gray-50" {
                (body)
            }
        }
    }
}

pub fn error_page(status: StatusCode, title: &str, message: &str) -> Markup {
    layout(
        title,
        html! {
            div class="max-w-md mx-auto mt-20 p-6 text-center" {
                h1 class="text-2xl font-semibold mb-4" { (status.as_u16()) " " (title) }
                p class="mb-6" { (message) }
                a href="/" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition" {
                    "Go Home"
                }
            }
        },
    )
}
