use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::newsletter::Newsletter;
use crate::components::reveal::Reveal;
use crate::components::testimonials::{Testimonial, Testimonials};

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "They rebuilt our storefront in three weeks and sales followed. \
                    Communication was effortless the whole way.",
            author: "Samira K.",
            role: "Owner, Nour Boutique",
        },
        Testimonial {
            quote: "The brand identity they delivered finally matches the quality of \
                    our product. Worth every riyal.",
            author: "Omar H.",
            role: "Founder, Dhafir Coffee",
        },
        Testimonial {
            quote: "Responsive, honest about timelines, and the site has been rock \
                    solid since launch.",
            author: "Lina T.",
            role: "Marketing Lead, Saba Tours",
        },
        Testimonial {
            quote: "Our campaign reach tripled in two months. They treat your budget \
                    like their own.",
            author: "Yusuf A.",
            role: "Director, Aden Fitness",
        },
        Testimonial {
            quote: "From logo to launch they handled everything. We just answered a \
                    few questions and approved drafts.",
            author: "Hana M.",
            role: "Co-founder, Marib Crafts",
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
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

    html! {
        <div class="landing-page">
            <style>
                {r#"
                body.no-scroll {
                    overflow: hidden;
                }
                .site-header {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    padding: 1.25rem 2rem;
                    z-index: 20;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.sticky {
                    position: fixed;
                    background: rgba(17, 17, 27, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.25);
                }
                .header-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-links ul {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-links a {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                }
                .nav-links a:hover {
                    color: #7EB2FF;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                .mobile-menu {
                    position: fixed;
                    top: 0;
                    right: 0;
                    width: 260px;
                    height: 100vh;
                    background: #11111b;
                    padding: 4rem 2rem;
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                    z-index: 40;
                }
                .mobile-menu.active {
                    transform: translateX(0);
                }
                .menu-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .mobile-nav {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .mobile-nav a {
                    color: #fff;
                    text-decoration: none;
                    font-size: 1.1rem;
                }
                .overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                    z-index: 30;
                }
                .overlay.active {
                    opacity: 1;
                    pointer-events: auto;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                section {
                    padding: 5rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.animate {
                    opacity: 1;
                    transform: translateY(0);
                }
                .testimonials-slider {
                    position: relative;
                    padding: 0 3rem;
                }
                .testimonials-viewport {
                    overflow: hidden;
                }
                .testimonials-track {
                    display: flex;
                    transition: transform 0.5s ease;
                }
                .testimonial-card {
                    padding: 2rem;
                    box-sizing: border-box;
                }
                .slider-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 50%;
                    width: 40px;
                    height: 40px;
                    color: #fff;
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                .slider-arrow:disabled {
                    opacity: 0.3;
                    cursor: default;
                }
                .slider-arrow.prev { left: 0; }
                .slider-arrow.next { right: 0; }
                .slider-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .dot.active {
                    background: #7EB2FF;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 560px;
                    margin: 0 auto;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(30, 30, 30, 0.7);
                    color: #fff;
                }
                .terms-label {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                }
                .form-success {
                    color: #4caf50;
                    text-align: center;
                }
                .back-to-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    border: none;
                    background: #7EB2FF;
                    color: #11111b;
                    font-size: 1.2rem;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                    z-index: 25;
                }
                .back-to-top.active {
                    opacity: 1;
                    pointer-events: auto;
                }
                .site-footer {
                    padding: 3rem 2rem;
                    text-align: center;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .newsletter-form {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: flex; }
                    .hero h1 { font-size: 2.2rem; }
                }
                "#}
            </style>

            <section id="home" class="hero">
                <h1>{"Design that earns trust"}</h1>
                <p>{"Badr Studio builds websites, brands, and campaigns for businesses that want to grow."}</p>
                <a href="#contact" class="cta">{"Start a project"}</a>
            </section>

            <section id="services">
                <h2>{"Services"}</h2>
                <div class="services-grid">
                    <Reveal>
                        <div class="service-card">
                            <h3>{"Web Design"}</h3>
                            <p>{"Fast, accessible sites designed around your customers."}</p>
                        </div>
                    </Reveal>
                    <Reveal>
                        <div class="service-card">
                            <h3>{"Branding"}</h3>
                            <p>{"Identity systems that look right everywhere you show up."}</p>
                        </div>
                    </Reveal>
                    <Reveal>
                        <div class="service-card">
                            <h3>{"Digital Marketing"}</h3>
                            <p>{"Campaigns measured by outcomes, not impressions."}</p>
                        </div>
                    </Reveal>
                    <Reveal>
                        <div class="service-card">
                            <h3>{"E-commerce"}</h3>
                            <p>{"Storefronts that make buying the easy part."}</p>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section id="testimonials">
                <h2>{"What clients say"}</h2>
                <Testimonials items={testimonials()} />
            </section>

            <section id="contact">
                <h2>{"Get in touch"}</h2>
                <Reveal>
                    <ContactForm />
                </Reveal>
            </section>

            <footer class="site-footer">
                <p>{"Stay in the loop"}</p>
                <Newsletter />
                <p class="copyright">{"© 2025 Badr Studio"}</p>
            </footer>

            <BackToTop />
        </div>
    }
}
