// File: src/pages/success.rs
// Purpose: Results page shown after an accepted registration

use maud::{html, Markup};
use regform::ResultsView;

const BUTTON_CLASS: &str = "px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition";

pub fn page(view: &ResultsView) -> Markup {
    let form_path = view.return_route().path();

    let body = match view {
        ResultsView::Empty => html! {
            div class="flex flex-col items-center justify-center min-h-screen p-4" {
                p class="mb-4 text-lg" { "No data submitted." }
                a href=(form_path) class=(BUTTON_CLASS) { "Go Back" }
            }
        },
        ResultsView::Details(submission) => html! {
            div class="max-w-md mx-auto mt-20 p-6 bg-white rounded-lg shadow-lg border border-green-400" {
                div class="flex items-center space-x-3 mb-6" {
                    span class="text-green-500 text-4xl" { "✓" }
                    h2 class="text-2xl font-semibold text-green-700" { "Success!" }
                }
                h3 class="text-lg font-medium mb-4" { "Submitted Details:" }
                ul class="list-disc list-inside space-y-2 text-gray-700" {
                    @for (label, value) in submission.rows() {
                        li {
                            strong { (label) ":" }
                            " " (value)
                        }
                    }
                }
                a href=(form_path) class={ "mt-8 block w-full text-center " (BUTTON_CLASS) } {
                    "Back to Form"
                }
            }
        },
    };

    super::layout("Registration Complete", body)
}
