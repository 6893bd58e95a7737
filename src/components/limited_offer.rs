use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

/// Promotional offer card. Starts compact, grows to full size shortly after
/// mount; clicking anywhere on it toggles between the two sizes.
#[function_component(LimitedOffer)]
pub fn limited_offer() -> Html {
    let expanded = use_state(|| false);

    {
        let expanded = expanded.clone();
        use_effect_with_deps(
            move |_| {
                let expand_timer = Timeout::new(1_500, move || {
                    expanded.set(true);
                });
                move || drop(expand_timer)
            },
            (),
        );
    }

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(!*expanded);
        })
    };

    html! {
        <div class={classes!("limited-offer", (*expanded).then(|| "expanded"))} onclick={toggle}>
            <style>
                {r#"
                    .limited-offer {
                        position: relative;
                        background: linear-gradient(to right, #f97316, #eab308);
                        color: #ffffff;
                        padding: 24px;
                        border-radius: 12px;
                        overflow: hidden;
                        cursor: pointer;
                        transform: scale(0.88);
                        transition: transform 0.4s ease;
                        animation: offer-float 3s ease-in-out infinite;
                    }
                    .limited-offer.expanded {
                        transform: scale(1);
                    }
                    @keyframes offer-float {
                        0%, 100% { margin-top: 0; }
                        50% { margin-top: -10px; }
                    }
                    .offer-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 12px;
                        animation: offer-pulse 3s linear infinite;
                    }
                    @keyframes offer-pulse {
                        0% { box-shadow: 0 0 0 0 rgba(249, 115, 22, 0.4); }
                        50% { box-shadow: 0 0 0 15px rgba(249, 115, 22, 0); }
                        100% { box-shadow: 0 0 0 0 rgba(249, 115, 22, 0); }
                    }
                    .offer-body {
                        position: relative;
                        z-index: 10;
                    }
                    .offer-title {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 8px;
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        margin-bottom: 12px;
                        text-align: center;
                    }
                    .offer-tagline {
                        text-align: center;
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 16px;
                        animation: offer-rock 2.5s linear infinite;
                    }
                    @keyframes offer-rock {
                        0%, 50%, 100% { transform: rotate(0deg); }
                        25% { transform: rotate(2deg); }
                        75% { transform: rotate(-2deg); }
                    }
                    .offer-perks {
                        background: rgba(255, 255, 255, 0.2);
                        padding: 16px;
                        border-radius: 8px;
                        backdrop-filter: blur(4px);
                    }
                    .offer-perks ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .offer-perks li {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        margin-bottom: 8px;
                    }
                    .offer-perks li:last-child {
                        margin-bottom: 0;
                    }
                    .offer-claim {
                        display: block;
                        margin: 16px auto 0;
                        width: fit-content;
                        background: #ffffff;
                        color: #ea580c;
                        font-weight: 700;
                        padding: 12px 32px;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        text-decoration: none;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .offer-claim:hover {
                        background: #fff7ed;
                        transform: scale(1.05);
                    }
                "#}
            </style>
            <div class="offer-glow"></div>
            <div class="offer-body">
                <h3 class="offer-title">{"⚡ Limited Time Offer ⚡"}</h3>
                <p class="offer-tagline">{"Get a website for our LOWEST price EVER!"}</p>
                <div class="offer-perks">
                    <ul>
                        <li>{"✓ No setup fees or hidden costs"}</li>
                        <li>{"✓ Cancel anytime - no long-term contract"}</li>
                        <li>{"✓ All features in selected plan included"}</li>
                    </ul>
                </div>
                <Link<Route> to={Route::Contact} classes="offer-claim">
                    {"Claim Offer Now!"}
                </Link<Route>>
            </div>
        </div>
    }
}
