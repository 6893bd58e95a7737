use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

/// Fallback page for routes that do not exist yet.
#[function_component(UnderConstruction)]
pub fn under_construction() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title("Page Under Construction");
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="construction-page">
            <style>
                {r#"
                    .construction-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #eff6ff, #dbeafe);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 16px;
                    }
                    .construction-card {
                        background: #ffffff;
                        border-radius: 12px;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                        padding: 48px;
                        max-width: 448px;
                        width: 100%;
                        text-align: center;
                        animation: card-enter 0.5s ease;
                    }
                    @keyframes card-enter {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .construction-icons {
                        position: relative;
                        display: inline-block;
                        margin-bottom: 24px;
                    }
                    .hard-hat {
                        font-size: 3.75rem;
                        display: inline-block;
                        animation: hat-rock 2s ease-in-out infinite;
                    }
                    @keyframes hat-rock {
                        0%, 50%, 100% { transform: rotate(0deg); }
                        25%, 75% { transform: rotate(15deg); }
                    }
                    .tools {
                        position: absolute;
                        right: -16px;
                        bottom: -16px;
                        font-size: 1.875rem;
                        display: inline-block;
                        animation: tools-wobble 1.5s ease-in-out infinite;
                    }
                    @keyframes tools-wobble {
                        0%, 100% { transform: rotate(-10deg); }
                        50% { transform: rotate(10deg); }
                    }
                    .construction-card h1 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #1f2937;
                        margin-bottom: 16px;
                    }
                    .construction-card p {
                        color: #4b5563;
                        margin-bottom: 32px;
                    }
                    .home-button {
                        display: inline-block;
                        background: #2563eb;
                        color: #ffffff;
                        font-weight: 500;
                        padding: 8px 24px;
                        border-radius: 8px;
                        text-decoration: none;
                        transition: background 0.3s ease, transform 0.2s ease;
                    }
                    .home-button:hover {
                        background: #1d4ed8;
                        transform: scale(1.05);
                    }
                "#}
            </style>
            <div class="construction-card">
                <div class="construction-icons">
                    <span class="hard-hat">{"👷"}</span>
                    <span class="tools">{"🔧"}</span>
                </div>
                <h1>{"Page Under Construction"}</h1>
                <p>
                    {"Oops! The page you're looking for is still under development. We're working hard to bring you something amazing. Please check back soon!"}
                </p>
                <Link<Route> to={Route::Landing} classes="home-button">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
