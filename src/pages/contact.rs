use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::seo::SeoTags;
use crate::config;
use crate::reveal::attach_reveal_listener;

#[derive(Clone, Copy, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Success,
}

#[derive(Serialize)]
struct ContactRequest {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    message: String,
}

const FAQS: &[(&str, &str)] = &[
    (
        "How soon can you respond to my inquiry?",
        "We typically respond to all inquiries within 24 business hours. For urgent matters, please call our office directly.",
    ),
    (
        "Do you work with international clients?",
        "Yes, we proudly serve clients worldwide. Our team can accommodate different time zones for meetings and project collaboration.",
    ),
    (
        "What information should I prepare before contacting you?",
        "To help us serve you better, please have a basic overview of your project, timeline expectations, and budget considerations ready when you reach out.",
    ),
    (
        "Can I schedule a consultation before committing to a project?",
        "Absolutely! We offer free initial consultations to discuss your needs and determine if we're the right fit for your project.",
    ),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);

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

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Sending {
                return;
            }
            let request = ContactRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                message: (*message).clone(),
            };
            status.set(FormStatus::Sending);

            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let status = status.clone();
            spawn_local(async move {
                // Form delivery is simulated; the payload is only logged.
                TimeoutFuture::new(1_500).await;
                log::info!(
                    "Contact form submitted: {}",
                    serde_json::to_string(&request).unwrap_or_default()
                );
                status.set(FormStatus::Success);
                first_name.set(String::new());
                last_name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());

                TimeoutFuture::new(3_000).await;
                status.set(FormStatus::Idle);
            });
        })
    };

    let on_first_name = {
        let first_name = first_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            first_name.set(input.value());
        })
    };
    let on_last_name = {
        let last_name = last_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            last_name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let bubbles = {
        let mut rng = SmallRng::seed_from_u64(web_sys::js_sys::Date::now() as u64);
        (0..24)
            .map(|_| {
                let size = rng.gen_range(5.0..25.0_f64);
                let top = rng.gen_range(0.0..100.0_f64);
                let left = rng.gen_range(0.0..100.0_f64);
                let duration = rng.gen_range(5.0..15.0_f64);
                let delay = rng.gen_range(0.0..5.0_f64);
                let style = format!(
                    "width: {size:.0}px; height: {size:.0}px; top: {top:.0}%; left: {left:.0}%; animation-duration: {duration:.1}s; animation-delay: {delay:.1}s;"
                );
                html! { <div class="hero-bubble" style={style}></div> }
            })
            .collect::<Html>()
    };

    html! {
        <>
            <SeoTags
                title="Contact Us | NextGen Websites"
                description="Get in touch with our web development team for questions, feedback, or project inquiries. Free initial consultations for every project."
                keywords="contact web agency, website consultation, web development inquiry"
                path="/contact"
            />
            <div class="contact-page">
                <section class="contact-hero">
                    <div class="contact-hero-bubbles">
                        { bubbles }
                    </div>
                    <div class="contact-hero-content">
                        <h1>
                            {"Let's "}
                            <span class="highlight">{"Connect"}</span>
                        </h1>
                        <p>
                            {"We'd love to hear from you! Get in touch with our team for any questions, feedback, or project inquiries."}
                        </p>
                    </div>
                    <div class="contact-hero-wave">
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1440 320" preserveAspectRatio="none">
                            <path fill="#ffffff" d="M0,224L48,213.3C96,203,192,181,288,181.3C384,181,480,203,576,197.3C672,192,768,160,864,160C960,160,1056,192,1152,186.7C1248,181,1344,139,1392,117.3L1440,96L1440,320L1392,320C1344,320,1248,320,1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z" />
                        </svg>
                    </div>
                </section>

                <section class="get-in-touch">
                    <div class="section-heading reveal">
                        <h2>{"Get In Touch"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"We're here to help and answer any questions you might have. We look forward to hearing from you!"}</p>
                    </div>

                    <div class="contact-columns">
                        <div class="info-grid reveal">
                            <div class="info-box">
                                <span class="info-icon">{"📍"}</span>
                                <h3>{"Our Location"}</h3>
                                <p>{"123 Business Avenue"}</p>
                                <p>{"Suite 200, Tech District"}</p>
                                <p>{"San Francisco, CA 94103"}</p>
                            </div>
                            <div class="info-box">
                                <span class="info-icon">{"📞"}</span>
                                <h3>{"Contact Info"}</h3>
                                <p><strong>{"Phone: "}</strong>{config::CONTACT_PHONE}</p>
                                <p><strong>{"Email: "}</strong>{config::CONTACT_EMAIL}</p>
                            </div>
                            <div class="info-box">
                                <span class="info-icon">{"🕐"}</span>
                                <h3>{"Business Hours"}</h3>
                                <p>{"Monday - Friday: 9AM - 6PM"}</p>
                                <p>{"Saturday: 10AM - 4PM"}</p>
                                <p>{"Sunday: Closed"}</p>
                            </div>
                            <div class="info-box">
                                <span class="info-icon">{"✉️"}</span>
                                <h3>{"Follow Us"}</h3>
                                <div class="social-row">
                                    <a href="https://facebook.com" target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                                    <a href="https://twitter.com" target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                                    <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                                    <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                                </div>
                            </div>
                        </div>

                        <div class="form-card reveal">
                            <div class="form-card-header">
                                <h3>{"Send us a Message"}</h3>
                                <p>{"Fill out the form and our team will get back to you as soon as possible."}</p>
                            </div>
                            <form class="contact-form" onsubmit={onsubmit}>
                                <div class="field-row">
                                    <div class="form-field">
                                        <label for="first-name">{"First Name "}<span class="required">{"*"}</span></label>
                                        <input
                                            id="first-name"
                                            type="text"
                                            placeholder="John"
                                            required=true
                                            value={(*first_name).clone()}
                                            onchange={on_first_name}
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label for="last-name">{"Last Name "}<span class="required">{"*"}</span></label>
                                        <input
                                            id="last-name"
                                            type="text"
                                            placeholder="Doe"
                                            required=true
                                            value={(*last_name).clone()}
                                            onchange={on_last_name}
                                        />
                                    </div>
                                </div>
                                <div class="form-field">
                                    <label for="email">{"Email Address "}<span class="required">{"*"}</span></label>
                                    <input
                                        id="email"
                                        type="email"
                                        placeholder="john@example.com"
                                        required=true
                                        value={(*email).clone()}
                                        onchange={on_email}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="phone">{"Phone Number"}</label>
                                    <input
                                        id="phone"
                                        type="tel"
                                        placeholder={config::CONTACT_PHONE}
                                        value={(*phone).clone()}
                                        onchange={on_phone}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="message">{"Your Message "}<span class="required">{"*"}</span></label>
                                    <textarea
                                        id="message"
                                        rows="4"
                                        placeholder="Please tell us how we can help you..."
                                        required=true
                                        value={(*message).clone()}
                                        onchange={on_message}
                                    />
                                </div>
                                <button
                                    type="submit"
                                    class="submit-button"
                                    disabled={*status == FormStatus::Sending}
                                >
                                    {
                                        if *status == FormStatus::Sending {
                                            html! { <><span class="spinner"></span>{"Sending..."}</> }
                                        } else {
                                            html! { {"Send Message →"} }
                                        }
                                    }
                                </button>
                                if *status == FormStatus::Success {
                                    <div class="success-note">
                                        {"✓ Thank you! Your message has been sent successfully."}
                                    </div>
                                }
                            </form>
                        </div>
                    </div>
                </section>

                <section class="contact-faq">
                    <div class="section-heading reveal">
                        <h2>{"Frequently Asked Questions"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"Find quick answers to common questions about our services and process."}</p>
                    </div>
                    <div class="faq-cards">
                        {
                            FAQS.iter().map(|(question, answer)| html! {
                                <div class="faq-card reveal">
                                    <h3>{*question}</h3>
                                    <p>{*answer}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="map-section">
                    <div class="section-heading reveal">
                        <h2>{"Find Us"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"Visit our location or contact us for more information"}</p>
                    </div>
                    <div class="map-wrap reveal">
                        <iframe
                            class="map-frame"
                            src="https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2923.7489252591395!2d151.03373725807984!3d-33.72928914103842!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x6b12a10135e524c7%3A0x7535eb17717c5fd6!2sNextGen%20Websites!5e0!3m2!1sen!2slk!4v1744293533225!5m2!1sen!2slk"
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Our Location"
                        />
                        <div class="map-card">
                            <h3>{"📍 Our Location"}</h3>
                            <p>{"123 Business Avenue"}</p>
                            <p>{"San Francisco, CA 94103"}</p>
                            <a href={config::CONTACT_PHONE_HREF}>{config::CONTACT_PHONE}</a>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            <a
                                class="directions-button"
                                href="https://maps.google.com/maps?ll=37.787784,-122.400467&z=16&t=m&hl=en&gl=US&mapclient=embed&q=San+Francisco,+CA+94103"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Get Directions"}
                            </a>
                        </div>
                    </div>
                    <p class="hours-line">
                        {"Open Monday - Friday: 9am - 6pm | Saturday: 10am - 4pm | Sunday: Closed"}
                    </p>
                </section>

                <section class="contact-cta">
                    <div class="cta-banner reveal">
                        <div class="cta-copy">
                            <h3>{"Need a faster response?"}</h3>
                            <p>{"Call us directly or schedule a video consultation with one of our experts."}</p>
                        </div>
                        <a href={config::CONTACT_PHONE_HREF} class="cta-button">
                            {"📞 Call Now"}
                        </a>
                    </div>
                </section>
            </div>
            <style>
                {r#"
                    .contact-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #f9fafb, #ffffff);
                        color: #1f2937;
                    }
                    .contact-page section {
                        padding: 80px 24px;
                    }
                    .contact-page .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .contact-page .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .contact-hero {
                        position: relative;
                        background: #2563eb;
                        color: #ffffff;
                        padding: 96px 24px 140px;
                        overflow: hidden;
                        text-align: center;
                    }
                    .contact-hero-bubbles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .hero-bubble {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        animation-name: bubble-drift;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    @keyframes bubble-drift {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-24px); }
                    }
                    .contact-hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 760px;
                        margin: 0 auto;
                    }
                    .contact-hero h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 24px;
                    }
                    .contact-hero .highlight {
                        color: #fde047;
                    }
                    .contact-hero p {
                        font-size: 1.25rem;
                        font-weight: 600;
                        opacity: 0.9;
                    }
                    .contact-hero-wave {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        line-height: 0;
                    }
                    .contact-hero-wave svg {
                        display: block;
                        width: 100%;
                        height: 80px;
                    }

                    .section-heading {
                        text-align: center;
                        max-width: 640px;
                        margin: 0 auto 40px;
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

                    .get-in-touch {
                        background: #ffffff;
                    }
                    .contact-columns {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 32px;
                    }
                    .info-grid {
                        flex: 1 1 440px;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 24px;
                        align-content: start;
                    }
                    .info-box {
                        background: #ffffff;
                        border: 1px solid #f3f4f6;
                        border-radius: 12px;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        padding: 24px;
                        text-align: center;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .info-box:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 10px 15px rgba(37, 99, 235, 0.15);
                    }
                    .info-icon {
                        font-size: 1.5rem;
                        display: inline-block;
                        margin-bottom: 12px;
                    }
                    .info-box h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        margin-bottom: 12px;
                    }
                    .info-box p {
                        color: #4b5563;
                        margin: 4px 0;
                    }
                    .social-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 12px;
                        margin-top: 8px;
                    }
                    .social-row a {
                        color: #2563eb;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .social-row a:hover {
                        color: #1e40af;
                    }

                    .form-card {
                        flex: 1 1 440px;
                        background: #ffffff;
                        border-radius: 16px;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                        overflow: hidden;
                    }
                    .form-card-header {
                        background: #2563eb;
                        color: #ffffff;
                        padding: 32px;
                    }
                    .form-card-header h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 12px;
                    }
                    .form-card-header p {
                        color: #dbeafe;
                    }
                    .contact-form {
                        padding: 32px;
                    }
                    .field-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 24px;
                    }
                    .form-field {
                        margin-bottom: 24px;
                    }
                    .form-field label {
                        display: block;
                        color: #374151;
                        font-weight: 500;
                        margin-bottom: 8px;
                    }
                    .form-field .required {
                        color: #ef4444;
                    }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        padding: 12px 16px;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                        background: #ffffff;
                        font-size: 1rem;
                        box-sizing: border-box;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .form-field input:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #3b82f6;
                        box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.3);
                    }
                    .submit-button {
                        width: 100%;
                        background: #2563eb;
                        color: #ffffff;
                        font-weight: 500;
                        padding: 12px 24px;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 8px;
                        font-size: 1rem;
                        transition: background 0.2s ease;
                    }
                    .submit-button:hover {
                        background: #1d4ed8;
                    }
                    .submit-button:disabled {
                        background: #93c5fd;
                        cursor: wait;
                    }
                    .spinner {
                        width: 18px;
                        height: 18px;
                        border: 3px solid rgba(255, 255, 255, 0.4);
                        border-top-color: #ffffff;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .success-note {
                        margin-top: 16px;
                        padding: 12px;
                        background: #dcfce7;
                        color: #15803d;
                        border-radius: 8px;
                    }

                    .contact-faq {
                        background: #f9fafb;
                    }
                    .faq-cards {
                        max-width: 760px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 24px;
                    }
                    .faq-card {
                        background: #ffffff;
                        border: 1px solid #f3f4f6;
                        border-radius: 8px;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        padding: 24px;
                    }
                    .faq-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 12px;
                    }
                    .faq-card p {
                        color: #4b5563;
                    }

                    .map-section {
                        background: linear-gradient(to bottom, #f9fafb, #f3f4f6);
                    }
                    .map-wrap {
                        position: relative;
                        max-width: 1100px;
                        margin: 0 auto;
                        border-radius: 12px;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .map-frame {
                        width: 100%;
                        height: 384px;
                        border: 0;
                        display: block;
                    }
                    .map-card {
                        position: absolute;
                        top: 32px;
                        right: 32px;
                        background: #ffffff;
                        padding: 24px;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        max-width: 320px;
                    }
                    .map-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 12px;
                    }
                    .map-card p {
                        color: #374151;
                        margin: 4px 0;
                    }
                    .map-card a {
                        display: block;
                        color: #3b82f6;
                        text-decoration: none;
                        margin-top: 8px;
                    }
                    .map-card a:hover {
                        color: #1d4ed8;
                    }
                    .map-card .directions-button {
                        margin-top: 16px;
                        background: #3b82f6;
                        color: #ffffff;
                        font-weight: 500;
                        padding: 8px 16px;
                        border-radius: 4px;
                        text-align: center;
                        transition: background 0.3s ease;
                    }
                    .map-card .directions-button:hover {
                        background: #2563eb;
                        color: #ffffff;
                    }
                    .hours-line {
                        text-align: center;
                        color: #6b7280;
                        margin-top: 32px;
                    }

                    .contact-cta {
                        background: #ffffff;
                    }
                    .cta-banner {
                        max-width: 1100px;
                        margin: 0 auto;
                        background: linear-gradient(to right, #2563eb, #1e40af);
                        border-radius: 16px;
                        padding: 48px;
                        color: #ffffff;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 32px;
                    }
                    .cta-copy h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 16px;
                    }
                    .cta-copy p {
                        font-size: 1.125rem;
                        opacity: 0.9;
                        max-width: 520px;
                    }
                    .cta-button {
                        padding: 16px 32px;
                        background: #ffffff;
                        color: #2563eb;
                        border-radius: 8px;
                        font-weight: 500;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: background 0.3s ease, transform 0.2s ease;
                    }
                    .cta-button:hover {
                        background: #eff6ff;
                        transform: scale(1.05);
                    }

                    @media (max-width: 768px) {
                        .contact-hero h1 {
                            font-size: 2.25rem;
                        }
                        .contact-page section {
                            padding: 60px 16px;
                        }
                        .map-card {
                            position: static;
                            max-width: none;
                            margin-top: 0;
                            border-radius: 0;
                        }
                    }
                "#}
            </style>
        </>
    }
}
