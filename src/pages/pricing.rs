use yew::prelude::*;
use yew_router::components::Link;

use crate::components::seo::SeoTags;
use crate::reveal::attach_reveal_listener;
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    fn other(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }
}

struct Plan {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    monthly: u32,
    yearly: u32,
    popular: bool,
    features: &'static [(&'static str, bool)],
}

impl Plan {
    fn price(&self, billing: BillingCycle) -> String {
        match billing {
            BillingCycle::Monthly => format_usd(self.monthly),
            BillingCycle::Yearly => format_usd(self.yearly),
        }
    }
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        description: "Perfect for small businesses",
        icon: "🚀",
        monthly: 49,
        yearly: 470,
        popular: false,
        features: &[
            ("5-page responsive website", true),
            ("Mobile-friendly design", true),
            ("Contact form integration", true),
            ("Basic SEO setup", true),
            ("1 revision round", true),
            ("Social media integration", true),
            ("Content management system", false),
            ("E-commerce functionality", false),
            ("Custom animations", false),
            ("24/7 Priority support", false),
        ],
    },
    Plan {
        name: "Professional",
        description: "For growing businesses",
        icon: "⭐",
        monthly: 99,
        yearly: 950,
        popular: true,
        features: &[
            ("10-page responsive website", true),
            ("Mobile-friendly design", true),
            ("Contact form integration", true),
            ("Advanced SEO optimization", true),
            ("3 revision rounds", true),
            ("Social media integration", true),
            ("Content management system", true),
            ("Basic e-commerce (up to 20 products)", true),
            ("Custom animations", false),
            ("24/7 Priority support", false),
        ],
    },
    Plan {
        name: "Enterprise",
        description: "For larger organizations",
        icon: "👑",
        monthly: 199,
        yearly: 1_910,
        popular: false,
        features: &[
            ("Unlimited pages", true),
            ("Mobile-friendly design", true),
            ("Advanced contact form & CRM integration", true),
            ("Premium SEO optimization", true),
            ("Unlimited revision rounds", true),
            ("Advanced social media integration", true),
            ("Advanced content management system", true),
            ("Full e-commerce functionality", true),
            ("Custom animations & interactions", true),
            ("24/7 Priority support", true),
        ],
    },
];

const COMPARISON: &[(&str, [&str; 3])] = &[
    ("Number of Pages", ["5 pages", "10 pages", "Unlimited"]),
    ("Mobile-friendly Design", ["✓", "✓", "✓"]),
    ("Contact Form", ["Basic", "Advanced", "Advanced with CRM"]),
    ("SEO Optimization", ["Basic", "Advanced", "Premium"]),
    ("Revision Rounds", ["1 round", "3 rounds", "Unlimited"]),
    ("Social Media Integration", ["✓", "✓", "Advanced"]),
    ("Content Management System", ["✗", "✓", "Advanced"]),
    ("E-commerce Functionality", ["✗", "Up to 20 products", "Unlimited products"]),
    ("Custom Animations", ["✗", "✗", "✓"]),
    ("24/7 Priority Support", ["✗", "✗", "✓"]),
];

const FAQS: &[(&str, &str)] = &[
    (
        "What payment methods do you accept?",
        "We accept all major credit cards including Visa, MasterCard, and American Express. We also accept PayPal and bank transfers for annual subscriptions.",
    ),
    (
        "Can I switch between plans later?",
        "Yes! You can upgrade or downgrade your plan at any time. When upgrading, you'll be prorated for the remainder of your billing cycle. When downgrading, changes will take effect at the start of your next billing cycle.",
    ),
    (
        "Is there a setup fee?",
        "No, there are no setup fees for any of our plans. The price you see is the total you'll pay.",
    ),
    (
        "Do you offer custom solutions beyond these plans?",
        "Absolutely! If you have specific requirements that aren't covered by our standard plans, we'd be happy to provide a custom quote. Contact our sales team for more information.",
    ),
    (
        "What happens when my subscription ends?",
        "Subscriptions automatically renew at the end of your billing cycle. You can cancel auto-renewal at any time through your account dashboard.",
    ),
];

fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let billing = use_state(|| BillingCycle::Monthly);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    use_effect_with_deps(
        move |_| attach_reveal_listener(&[".reveal"]),
        (),
    );

    let toggle_billing = {
        let billing = billing.clone();
        Callback::from(move |_: MouseEvent| {
            billing.set(billing.other());
        })
    };

    html! {
        <>
            <SeoTags
                title="Pricing | NextGen Websites"
                description="Simple, transparent subscription pricing for professional websites. Monthly and yearly plans for businesses of all sizes with no hidden fees."
                keywords="website pricing, web design subscription, affordable websites, monthly website plans"
                path="/pricing"
            />
            <div class="pricing-page">
                <section class="pricing-hero">
                    <div class="pricing-hero-glow glow-right"></div>
                    <div class="pricing-hero-glow glow-left"></div>
                    <div class="pricing-hero-content">
                        <div class="hero-heading reveal">
                            <span class="pricing-badge">{"Simple, transparent pricing"}</span>
                            <h1>
                                {"Plans for businesses of all "}
                                <span class="underlined">{"sizes"}</span>
                            </h1>
                            <p>
                                {"Choose the perfect plan for your business needs. All plans include our award-winning web design and development services."}
                            </p>
                        </div>

                        <div class="billing-toggle reveal">
                            <span class={classes!("toggle-label", (*billing == BillingCycle::Monthly).then(|| "active"))}>
                                {"Monthly"}
                            </span>
                            <div class="toggle-track" onclick={toggle_billing}>
                                <div class={classes!("toggle-knob", (*billing == BillingCycle::Yearly).then(|| "yearly"))}></div>
                            </div>
                            <span class={classes!("toggle-label", (*billing == BillingCycle::Yearly).then(|| "active"))}>
                                {"Yearly"}
                            </span>
                            <span class="save-pill">{"🏷️ Save 20%"}</span>
                        </div>

                        <div class="plans-grid">
                            {
                                PLANS.iter().map(|plan| {
                                    let card_class = if plan.popular { "plan-card popular" } else { "plan-card" };
                                    html! {
                                        <div class={classes!(card_class, "reveal")}>
                                            if plan.popular {
                                                <div class="popular-ribbon">{"MOST POPULAR"}</div>
                                            }
                                            <div class="plan-header">
                                                <span class="plan-icon">{plan.icon}</span>
                                                <h3>{plan.name}</h3>
                                                <p class="plan-description">{plan.description}</p>
                                                <div class="plan-price">
                                                    <span class="amount">{plan.price(*billing)}</span>
                                                    <span class="period">{billing.suffix()}</span>
                                                </div>
                                                <Link<Route> to={Route::Contact} classes="plan-cta">
                                                    {"Get Started →"}
                                                </Link<Route>>
                                            </div>
                                            <div class="plan-features">
                                                <h4>{"Features include:"}</h4>
                                                {
                                                    plan.features.iter().map(|(text, included)| html! {
                                                        <div class={classes!("feature-row", (!included).then(|| "excluded"))}>
                                                            <span class="feature-mark">{if *included { "✓" } else { "✗" }}</span>
                                                            <span>{*text}</span>
                                                        </div>
                                                    }).collect::<Html>()
                                                }
                                            </div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </section>

                <section class="comparison-section">
                    <div class="section-heading reveal">
                        <h2>{"Compare All Features"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"A detailed breakdown of what's included in each plan to help you make the right choice."}</p>
                    </div>
                    <div class="comparison-table-wrap reveal">
                        <table class="comparison-table">
                            <thead>
                                <tr>
                                    <th class="feature-col">{"Feature"}</th>
                                    {
                                        PLANS.iter().map(|plan| html! {
                                            <th class={classes!(plan.popular.then(|| "popular-col"))}>
                                                <div class="plan-col-name">{plan.name}</div>
                                                <div class="plan-col-price">
                                                    {format!("{}{}", plan.price(*billing), billing.suffix())}
                                                </div>
                                            </th>
                                        }).collect::<Html>()
                                    }
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    COMPARISON.iter().map(|(feature, cells)| html! {
                                        <tr>
                                            <td class="feature-col">{*feature}</td>
                                            {
                                                cells.iter().enumerate().map(|(i, cell)| html! {
                                                    <td class={classes!(PLANS[i].popular.then(|| "popular-col"))}>
                                                        {*cell}
                                                    </td>
                                                }).collect::<Html>()
                                            }
                                        </tr>
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    </div>
                </section>

                <section class="faq-section">
                    <div class="section-heading reveal">
                        <h2>{"Frequently Asked Questions"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"Got questions? We've got answers."}</p>
                    </div>
                    <div class="faq-list reveal">
                        {
                            FAQS.iter().map(|(question, answer)| html! {
                                <FaqItem question={question.to_string()}>
                                    <p>{*answer}</p>
                                </FaqItem>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="annual-cta">
                    <div class="annual-cta-content reveal">
                        <div class="annual-copy">
                            <span class="bolt-tag">{"⚡ Limited Time Offer"}</span>
                            <h2>{"Get 3 months free with annual billing"}</h2>
                            <p>{"Sign up for any annual plan today and get an additional 3 months at no extra cost."}</p>
                        </div>
                        <Link<Route> to={Route::Contact} classes="annual-button">
                            {"Start Your Free Trial →"}
                        </Link<Route>>
                    </div>
                </section>

                <section class="pricing-testimonial">
                    <div class="reveal">
                        <div class="banner-stars">{"★★★★★"}</div>
                        <p class="banner-quote">
                            {"\"We've tried several web design agencies in the past, but none delivered the quality and attention to detail that NextGen Websites has. Their Professional plan was exactly what we needed, and the ROI has been incredible.\""}
                        </p>
                        <h4>{"Michael Chen"}</h4>
                        <p class="banner-role">{"E-commerce Entrepreneur"}</p>
                    </div>
                </section>

                <section class="guarantee">
                    <p>
                        {"All plans come with a "}
                        <span class="guarantee-highlight">{"30-day money-back guarantee"}</span>
                        {". If you're not completely satisfied, we'll refund your payment."}
                    </p>
                </section>
            </div>
            <style>
                {r#"
                    .pricing-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #f9fafb, #ffffff);
                        color: #1f2937;
                        overflow: hidden;
                    }
                    .pricing-page section {
                        padding: 80px 24px;
                    }
                    .pricing-page .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .pricing-page .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .pricing-hero {
                        position: relative;
                    }
                    .pricing-hero-glow {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(60px);
                        opacity: 0.5;
                    }
                    .glow-right {
                        width: 384px;
                        height: 384px;
                        background: #dbeafe;
                        top: -40px;
                        right: -40px;
                    }
                    .glow-left {
                        width: 288px;
                        height: 288px;
                        background: #f3e8ff;
                        bottom: -40px;
                        left: -40px;
                    }
                    .pricing-hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .hero-heading {
                        text-align: center;
                        margin-bottom: 32px;
                    }
                    .pricing-badge {
                        display: inline-block;
                        padding: 4px 16px;
                        border-radius: 9999px;
                        background: #dbeafe;
                        color: #2563eb;
                        font-weight: 500;
                        font-size: 0.875rem;
                        margin-bottom: 24px;
                    }
                    .hero-heading h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 24px;
                    }
                    .hero-heading .underlined {
                        color: #2563eb;
                        box-shadow: inset 0 -12px 0 #dbeafe;
                    }
                    .hero-heading p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 640px;
                        margin: 0 auto;
                    }

                    .billing-toggle {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 12px;
                        margin-bottom: 40px;
                    }
                    .toggle-label {
                        font-size: 1.125rem;
                        color: #6b7280;
                    }
                    .toggle-label.active {
                        font-weight: 600;
                        color: #2563eb;
                    }
                    .toggle-track {
                        width: 64px;
                        height: 32px;
                        background: #dbeafe;
                        border-radius: 9999px;
                        padding: 4px;
                        cursor: pointer;
                        position: relative;
                    }
                    .toggle-knob {
                        width: 24px;
                        height: 24px;
                        background: #2563eb;
                        border-radius: 50%;
                        position: absolute;
                        transition: transform 0.25s ease;
                    }
                    .toggle-knob.yearly {
                        transform: translateX(32px);
                    }
                    .save-pill {
                        margin-left: 8px;
                        padding: 4px 12px;
                        background: #dbeafe;
                        color: #1e40af;
                        font-size: 0.875rem;
                        font-weight: 600;
                        border-radius: 9999px;
                    }

                    .plans-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 32px;
                        margin-top: 40px;
                    }
                    .plan-card {
                        background: #ffffff;
                        color: #1f2937;
                        border: 2px solid #e5e7eb;
                        border-radius: 16px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        position: relative;
                        transition: transform 0.3s ease, box-shadow 0.3s ease, border-color 0.3s ease;
                    }
                    .plan-card:hover {
                        transform: translateY(-8px);
                        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.25);
                        border-color: #93c5fd;
                    }
                    .plan-card.popular {
                        background: linear-gradient(to bottom right, #2563eb, #1e40af);
                        color: #ffffff;
                        border-color: #3b82f6;
                    }
                    .popular-ribbon {
                        position: absolute;
                        right: -48px;
                        top: 32px;
                        background: #facc15;
                        color: #1e3a8a;
                        font-weight: 700;
                        font-size: 0.875rem;
                        padding: 4px 40px;
                        transform: rotate(45deg);
                    }
                    .plan-header {
                        padding: 32px;
                        border-bottom: 1px solid rgba(128, 128, 128, 0.2);
                        text-align: center;
                    }
                    .plan-icon {
                        font-size: 2.25rem;
                        display: inline-block;
                        margin-bottom: 16px;
                    }
                    .plan-header h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 4px;
                    }
                    .plan-description {
                        opacity: 0.75;
                        margin-bottom: 24px;
                    }
                    .plan-price {
                        display: flex;
                        align-items: baseline;
                        justify-content: center;
                        gap: 8px;
                        margin-bottom: 24px;
                    }
                    .plan-price .amount {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .plan-price .period {
                        opacity: 0.75;
                    }
                    .plan-cta {
                        display: block;
                        width: 100%;
                        padding: 12px 24px;
                        border-radius: 8px;
                        font-weight: 600;
                        text-decoration: none;
                        text-align: center;
                        background: #2563eb;
                        color: #ffffff;
                        transition: background 0.2s ease, transform 0.2s ease;
                        box-sizing: border-box;
                    }
                    .plan-cta:hover {
                        background: #1d4ed8;
                        transform: scale(1.03);
                    }
                    .plan-card.popular .plan-cta {
                        background: #ffffff;
                        color: #2563eb;
                    }
                    .plan-card.popular .plan-cta:hover {
                        background: #eff6ff;
                    }
                    .plan-features {
                        padding: 32px;
                        flex-grow: 1;
                    }
                    .plan-features h4 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 16px;
                    }
                    .feature-row {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        padding: 8px 0;
                    }
                    .feature-row .feature-mark {
                        color: #22c55e;
                        font-weight: 700;
                    }
                    .feature-row.excluded {
                        opacity: 0.5;
                    }
                    .feature-row.excluded .feature-mark {
                        color: #9ca3af;
                    }
                    .plan-card.popular .feature-row .feature-mark {
                        color: #ffffff;
                    }
                    .plan-card.popular .feature-row.excluded .feature-mark {
                        color: #bfdbfe;
                    }

                    .section-heading {
                        text-align: center;
                        max-width: 640px;
                        margin: 0 auto 48px;
                    }
                    .section-heading h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 16px;
                    }
                    .accent-bar {
                        width: 80px;
                        height: 4px;
                        background: #2563eb;
                        margin-bottom: 24px;
                    }
                    .accent-bar.centered {
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .section-heading p {
                        font-size: 1.125rem;
                        color: #4b5563;
                    }

                    .comparison-section {
                        background: #f9fafb;
                    }
                    .comparison-table-wrap {
                        max-width: 1100px;
                        margin: 0 auto;
                        overflow-x: auto;
                        background: #ffffff;
                        border-radius: 12px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .comparison-table {
                        width: 100%;
                        border-collapse: collapse;
                    }
                    .comparison-table th,
                    .comparison-table td {
                        padding: 16px 24px;
                        text-align: center;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .comparison-table .feature-col {
                        text-align: left;
                        font-weight: 500;
                        color: #374151;
                    }
                    .comparison-table thead .feature-col {
                        font-size: 1.125rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #6b7280;
                    }
                    .comparison-table tbody tr:nth-child(odd) {
                        background: #f9fafb;
                    }
                    .plan-col-name {
                        font-weight: 700;
                        font-size: 1.25rem;
                    }
                    .plan-col-price {
                        font-size: 0.875rem;
                        opacity: 0.75;
                    }
                    .comparison-table .popular-col {
                        background: #eff6ff;
                        color: #1e40af;
                    }

                    .faq-section {
                        background: #ffffff;
                    }
                    .faq-list {
                        max-width: 860px;
                        margin: 0 auto;
                    }
                    .faq-item {
                        border-bottom: 1px solid #e5e7eb;
                        padding: 16px 0;
                    }
                    .faq-question {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        width: 100%;
                        background: none;
                        border: none;
                        cursor: pointer;
                        text-align: left;
                        padding: 0;
                    }
                    .faq-question .question-text {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #1f2937;
                    }
                    .faq-question .toggle-icon {
                        font-size: 1.5rem;
                        color: #6b7280;
                    }
                    .faq-answer {
                        display: none;
                        color: #4b5563;
                        padding-top: 12px;
                    }
                    .faq-item.open .faq-answer {
                        display: block;
                    }

                    .annual-cta {
                        background: linear-gradient(to right, #2563eb, #1e40af);
                    }
                    .annual-cta-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 40px;
                        color: #ffffff;
                    }
                    .bolt-tag {
                        color: #fde047;
                        font-weight: 600;
                        display: inline-block;
                        margin-bottom: 16px;
                    }
                    .annual-copy h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 16px;
                    }
                    .annual-copy p {
                        font-size: 1.125rem;
                        color: #dbeafe;
                    }
                    .annual-button {
                        background: #ffffff;
                        color: #2563eb;
                        font-weight: 700;
                        padding: 16px 40px;
                        border-radius: 8px;
                        text-decoration: none;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .annual-button:hover {
                        background: #eff6ff;
                        transform: scale(1.05);
                    }

                    .pricing-testimonial {
                        background: #f9fafb;
                        text-align: center;
                    }
                    .banner-stars {
                        color: #facc15;
                        font-size: 1.25rem;
                        letter-spacing: 4px;
                        margin-bottom: 24px;
                    }
                    .banner-quote {
                        font-size: 1.5rem;
                        font-weight: 500;
                        font-style: italic;
                        color: #374151;
                        max-width: 900px;
                        margin: 0 auto 32px;
                    }
                    .pricing-testimonial h4 {
                        font-weight: 700;
                        color: #1f2937;
                        margin-bottom: 4px;
                    }
                    .banner-role {
                        color: #6b7280;
                    }

                    .guarantee {
                        background: #ffffff;
                        text-align: center;
                    }
                    .guarantee p {
                        font-size: 1.125rem;
                        color: #374151;
                    }
                    .guarantee-highlight {
                        font-weight: 700;
                        color: #2563eb;
                    }

                    @media (max-width: 768px) {
                        .hero-heading h1 {
                            font-size: 2.25rem;
                        }
                        .pricing-page section {
                            padding: 60px 16px;
                        }
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_prices_give_a_20_percent_discount() {
        for plan in PLANS {
            assert_eq!(plan.yearly, plan.monthly * 12 * 8 / 10, "{}", plan.name);
        }
    }

    #[test]
    fn every_plan_lists_the_same_feature_count() {
        for plan in PLANS {
            assert_eq!(plan.features.len(), 10, "{}", plan.name);
        }
    }

    #[test]
    fn comparison_table_covers_every_plan() {
        for (feature, cells) in COMPARISON {
            assert_eq!(cells.len(), PLANS.len(), "{}", feature);
        }
    }

    #[test]
    fn prices_format_with_thousands_separators() {
        assert_eq!(format_usd(49), "$49");
        assert_eq!(format_usd(470), "$470");
        assert_eq!(format_usd(1_910), "$1,910");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn exactly_one_plan_is_marked_popular() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }
}
