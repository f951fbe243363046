use chrono::Datelike;
use yew::prelude::*;

use crate::actions::scroll_to_anchor;
use crate::carousel::controller::NavigationEvent;
use crate::components::{
    background_cells::BackgroundCells, button::CtaButton, carousel::TestimonialCarousel,
    checklist::Assessment, faq::Faq, ribbon::Ribbon, section_title::SectionTitle,
};
use crate::content::{
    avatar_url, FEATURES, JOURNEY_PHASES, OFFER_ITEMS, PRICE, RATING, STUDENT_COUNT,
    STUDY_PLAN_BENEFITS, TESTIMONIAL_IMAGES,
};
use crate::AppContext;

#[derive(Properties, PartialEq)]
struct ScrollCtaProps {
    on_scroll: Callback<MouseEvent>,
}

#[function_component(Hero)]
fn hero(props: &ScrollCtaProps) -> Html {
    html! {
        <section class="hero">
            <BackgroundCells>
                <div class="hero-content fade-in-up">
                    <div class="hero-badge">
                        <span class="badge-icon">{"✦"}</span>
                        <span>{"Início Imediato Disponível"}</span>
                    </div>
                    <h1>
                        {"O Começo Certo"}<br/>
                        <span class="text-gradient">{"no Violino"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Descubra um caminho simples e direto para dar seus primeiros passos no violino com qualidade. Desenvolvido para quem quer começar do zero e sentir a emoção de tocar suas primeiras músicas com segurança."}
                    </p>
                    <div class="hero-cta-group">
                        <CtaButton onclick={props.on_scroll.clone()} class={classes!("hero-cta")}>
                            {"QUERO TOCAR VIOLINO →"}
                        </CtaButton>
                    </div>
                </div>
            </BackgroundCells>
        </section>
    }
}

#[function_component(Ribbons)]
fn ribbons() -> Html {
    html! {
        <div class="ribbons">
            <div class="ribbon tilted-back"><Ribbon /></div>
            <div class="ribbon tilted-forward"><Ribbon reverse={true} /></div>
        </div>
    }
}

#[function_component(AssessmentSection)]
fn assessment_section(props: &ScrollCtaProps) -> Html {
    html! {
        <section class="assessment">
            <div class="container narrow">
                <SectionTitle
                    animate={true}
                    subtitle="Diagnóstico Inicial"
                    highlight="SIM!"
                    description="Marque os desafios que impedem você de tocar violino."
                >
                    {"Você se identifica com algum destes pontos? Responda"}
                </SectionTitle>

                <Assessment />

                <div class="study-plan glass-panel reveal">
                    <span class="study-plan-watermark">{"♫"}</span>
                    <p class="study-plan-label">{"Plano de Estudo:"}</p>
                    <h3>{"Com o Desafio "}<span class="accent">{"Violino do Zero"}</span></h3>
                    <div class="benefit-grid">
                        {
                            for STUDY_PLAN_BENEFITS.iter().map(|benefit| html! {
                                <div class="benefit glass-panel">
                                    <span class="benefit-check">{"✔"}</span>
                                    <p>{*benefit}</p>
                                </div>
                            })
                        }
                    </div>
                    <CtaButton onclick={props.on_scroll.clone()}>
                        {"Garantir Minha Vaga →"}
                    </CtaButton>
                </div>
            </div>
        </section>
    }
}

#[function_component(Journey)]
fn journey() -> Html {
    let last = JOURNEY_PHASES.len() - 1;
    html! {
        <section class="journey">
            <div class="container">
                <SectionTitle subtitle="Fases da Jornada" highlight="sua evolução">
                    {"Acompanhe seu progresso"}
                </SectionTitle>
                <div class="phase-row">
                    {
                        for JOURNEY_PHASES.iter().enumerate().map(|(i, phase)| html! {
                            <>
                                <div class="phase glass-panel reveal">
                                    <div class="phase-head">
                                        <div class="phase-icon">{phase.icon}</div>
                                        <span class="phase-step">{phase.step}</span>
                                    </div>
                                    <h4>{phase.title}</h4>
                                    <p>{phase.description}</p>
                                    <div class="phase-bar"><div class="phase-bar-fill"></div></div>
                                </div>
                                {
                                    if i < last {
                                        html! { <div class="phase-connector"><span>{"›"}</span></div> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialsProps {
    autoplay_interval_ms: u32,
    swipe_threshold: f64,
    transition_ms: u32,
}

#[function_component(Testimonials)]
fn testimonials(props: &TestimonialsProps) -> Html {
    let shown = use_state(|| 0usize);
    let images: Vec<AttrValue> = TESTIMONIAL_IMAGES.iter().map(|url| AttrValue::from(*url)).collect();
    let total = images.len();

    let on_navigate = {
        let shown = shown.clone();
        Callback::from(move |event: NavigationEvent| shown.set(event.index))
    };

    html! {
        <section class="testimonials">
            <div class="container wide">
                <SectionTitle
                    animate={true}
                    subtitle="Resultados Reais"
                    highlight="alunos"
                    description="Veja o que os alunos estão compartilhando sobre sua evolução."
                >
                    {"O que dizem nossos"}
                </SectionTitle>

                <TestimonialCarousel
                    images={images}
                    autoplay_interval_ms={props.autoplay_interval_ms}
                    swipe_threshold={props.swipe_threshold}
                    transition_ms={props.transition_ms}
                    on_navigate={Some(on_navigate)}
                />
                <p class="carousel-counter" aria-live="polite">
                    {format!("{:02} / {:02}", *shown + 1, total)}
                </p>

                <div class="social-proof glass-panel">
                    <div class="avatars">
                        { for (0..5).map(|i| html! { <img src={avatar_url(i)} alt="Aluno" /> }) }
                    </div>
                    <div>
                        <p>{"Junte-se a "}<strong>{STUDENT_COUNT}</strong>{" que já iniciaram sua jornada."}</p>
                        <div class="rating">
                            { for (0..5).map(|_| html! { <span class="star">{"★"}</span> }) }
                            <span class="rating-text">{RATING}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features">
            <div class="container wide">
                <SectionTitle
                    animate={true}
                    subtitle="Conteúdo Completo"
                    highlight="receber"
                    description="Tudo o que você precisa para sair do absoluto zero e tocar com confiança."
                >
                    {"Tudo o que você vai"}
                </SectionTitle>
                <div class="feature-grid">
                    {
                        for FEATURES.iter().map(|feature| html! {
                            <div class="feature-card reveal" style={format!("--accent: {};", feature.accent)}>
                                <div class="feature-glow"></div>
                                <div class="feature-head">
                                    <div class="feature-icon">{feature.icon}</div>
                                    <span class="feature-tag">{feature.tag}</span>
                                </div>
                                <h4>{feature.title}</h4>
                                <p>{feature.description}</p>
                                {
                                    if feature.is_bonus {
                                        html! { <span class="bonus-pulse"></span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct OfferProps {
    anchor: AttrValue,
    on_checkout: Callback<MouseEvent>,
}

#[function_component(Offer)]
fn offer(props: &OfferProps) -> Html {
    html! {
        <section id={props.anchor.clone()} class="offer">
            <div class="offer-frame">
                <span class="corner top-left"></span>
                <span class="corner bottom-right"></span>
                <div class="offer-card glass-panel reveal">
                    <div class="offer-inner">
                        <div class="offer-badge">{"Oferta Especial de Lançamento"}</div>
                        <h3>{"Garanta sua Vaga no "}<span class="text-gradient">{"Desafio Violino"}</span></h3>
                        <div class="offer-items">
                            {
                                for OFFER_ITEMS.iter().map(|item| html! {
                                    <div class="offer-item">
                                        <span class="benefit-check">{"✔"}</span>
                                        <span>{*item}</span>
                                    </div>
                                })
                            }
                        </div>
                        <div class="price">
                            <p class="price-original">{PRICE.original}</p>
                            <span class="price-current text-gradient">{PRICE.current}</span>
                            <span class="price-installments">{PRICE.installments}</span>
                        </div>
                        <CtaButton onclick={props.on_checkout.clone()} class={classes!("checkout-cta")}>
                            {"Ativar Acesso Agora 🚀"}
                        </CtaButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Guarantee)]
fn guarantee() -> Html {
    html! {
        <section class="guarantee">
            <div class="container">
                <div class="guarantee-card glass-panel reveal">
                    <div class="seal">
                        <div class="seal-ring">
                            <div class="seal-core">{"🛡"}</div>
                        </div>
                        <span class="seal-days">{"7 DIAS"}</span>
                    </div>
                    <div class="guarantee-copy">
                        <h2>{"Satisfação "}<span class="accent">{"Garantida"}</span></h2>
                        <p>
                            {"Teste o curso por 7 dias. Se não gostar da metodologia ou sentir que o violino não é para você, devolvemos seu dinheiro integralmente. Risco zero."}
                        </p>
                        <span class="guarantee-note">{"Reembolso 100% Digital"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <span class="footer-logo">{"V"}</span>
                <p>{"Violino do Zero V.2026"}</p>
            </div>
            <p class="footer-copy">
                {format!("© {} Desafio Violino do Zero. Todos os direitos reservados.", year)}
            </p>
            <div class="footer-dots">
                <span class="pulse green"></span>
                <span class="pulse blue"></span>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let ctx = use_context::<AppContext>().unwrap_or_default();

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

    let scroll_to_pricing = {
        let anchor = ctx.config.pricing_anchor.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&anchor);
        })
    };

    let checkout = {
        let checkout = ctx.checkout.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            checkout.initiate();
        })
    };

    let config = &ctx.config;

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <div class="radial-glow"></div>

            <Hero on_scroll={scroll_to_pricing.clone()} />
            <Ribbons />
            <AssessmentSection on_scroll={scroll_to_pricing} />
            <Journey />
            <Testimonials
                autoplay_interval_ms={config.autoplay_interval_ms}
                swipe_threshold={config.swipe_confidence_threshold}
                transition_ms={config.transition_ms}
            />
            <Features />
            <Offer anchor={config.pricing_anchor.clone()} on_checkout={checkout} />
            <Guarantee />
            <Faq />
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        position: relative;
        min-height: 100vh;
        color: #fff;
        background-color: #020202;
        background-image:
            linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
            linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
        background-size: 48px 48px;
        overflow-x: hidden;
    }
    .landing-page ::selection { background: #00FF88; color: #000; }
    .radial-glow {
        position: fixed;
        inset: 0;
        pointer-events: none;
        background: radial-gradient(circle at 50% 0%, rgba(0, 255, 136, 0.08), transparent 60%);
    }
    .container { max-width: 72rem; margin: 0 auto; }
    .container.narrow { max-width: 64rem; }
    .container.wide { max-width: 80rem; }
    section { position: relative; padding: 6rem 1.5rem; overflow: hidden; }
    .accent { color: #00FF88; }
    .text-gradient {
        background: linear-gradient(90deg, #00FF88, #00D1FF);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .glass-panel {
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid rgba(255, 255, 255, 0.08);
        backdrop-filter: blur(12px);
    }

    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(24px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .fade-in-up, .reveal { animation: fadeInUp 0.7s ease-out both; }

    /* Buttons */
    .cta-button {
        position: relative;
        overflow: hidden;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        padding: 1.25rem 2.5rem;
        border: none;
        border-radius: 0.75rem;
        background: linear-gradient(90deg, #00FF88, #00D1FF);
        color: #020202;
        font-weight: 900;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        cursor: pointer;
        box-shadow: 0 0 25px rgba(0, 255, 136, 0.35);
        transition: transform 0.2s, box-shadow 0.2s;
    }
    .cta-button:hover { transform: translateY(-2px); box-shadow: 0 0 40px rgba(0, 255, 136, 0.55); }
    .cta-shine { position: absolute; inset: 0; background: #fff; opacity: 0; transition: opacity 0.2s; }
    .cta-button:hover .cta-shine { opacity: 0.2; }
    .hero-cta { min-width: 280px; pointer-events: auto; }
    .checkout-cta { width: 100%; font-size: 1.15rem; padding: 1.75rem 2rem; }

    /* Section titles */
    .section-title { text-align: center; margin-bottom: 4rem; }
    .section-subtitle {
        display: block;
        margin-bottom: 1rem;
        color: #00FF88;
        font-family: monospace;
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
    }
    .section-title h2 { font-size: clamp(1.9rem, 5vw, 3.75rem); font-weight: 900; line-height: 1.15; }
    .section-description {
        max-width: 48rem;
        margin: 1.5rem auto 0;
        color: #9ca3af;
        font-style: italic;
        font-size: 1.15rem;
    }

    /* Hero + background cells */
    .hero { padding: 0; }
    .background-cells {
        position: relative;
        display: flex;
        justify-content: center;
        min-height: 80vh;
        width: 100%;
        overflow: hidden;
        background: #020202;
    }
    .cells-core { position: absolute; inset: 0; }
    .cells-clip { position: absolute; inset: 0; overflow: hidden; }
    .cells-fade {
        position: absolute;
        inset: 0;
        z-index: 40;
        pointer-events: none;
        background: linear-gradient(to bottom, transparent, rgba(2, 2, 2, 0.2), rgba(2, 2, 2, 0.8));
    }
    .cells-spotlight { position: absolute; inset: 0; z-index: 20; }
    .cell-pattern { position: relative; z-index: 30; display: flex; flex-direction: row; }
    .cells-dim { opacity: 0.6; }
    .cell-column { display: flex; flex-direction: column; border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
    .cell {
        width: 3rem;
        height: 3rem;
        border-left: 1px solid rgba(255, 255, 255, 0.1);
        cursor: pointer;
    }
    .cell.cell-highlight { border-color: rgba(0, 255, 136, 0.4); }
    .cell-fill { width: 100%; height: 100%; opacity: 0; transition: opacity 0.5s; }
    .cell:hover .cell-fill { opacity: 0.5; }
    .cell-fill.rippling { animation-name: cellRipple; animation-timing-function: ease-out; }
    @keyframes cellRipple {
        0% { opacity: 0; }
        50% { opacity: var(--ripple-peak); }
        100% { opacity: 0; }
    }
    .cells-content {
        position: relative;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        pointer-events: none;
        user-select: none;
    }
    .hero-content {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        max-width: 56rem;
        padding: 5rem 1.5rem;
    }
    .hero-badge {
        display: inline-flex;
        gap: 0.5rem;
        align-items: center;
        margin-bottom: 2rem;
        padding: 0.5rem 1rem;
        border: 1px solid rgba(0, 255, 136, 0.3);
        border-radius: 999px;
        background: rgba(0, 255, 136, 0.1);
        color: #00FF88;
        font-family: monospace;
        font-size: 0.65rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .hero h1 { font-size: clamp(2.5rem, 8vw, 6rem); font-weight: 900; line-height: 1.1; margin-bottom: 2rem; }
    .hero-subtitle { color: #9ca3af; font-size: clamp(1rem, 2.2vw, 1.5rem); max-width: 48rem; margin-bottom: 3rem; }
    .hero-cta-group { pointer-events: auto; }

    /* Ribbons */
    .ribbons {
        position: relative;
        z-index: 20;
        height: 12rem;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: #020202;
    }
    .ribbon {
        position: absolute;
        width: 150%;
        height: 3.5rem;
        display: flex;
        align-items: center;
        overflow: hidden;
        background: #000;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .ribbon.tilted-back { transform: rotate(-7deg); z-index: 10; }
    .ribbon.tilted-forward { transform: rotate(2deg); z-index: 20; }
    .ribbon-track { display: flex; gap: 3rem; white-space: nowrap; }
    .ribbon-item { display: flex; align-items: center; gap: 1rem; flex-shrink: 0; }
    .ribbon-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #00FF88; box-shadow: 0 0 10px #00FF88; }
    .ribbon-text { font-weight: 900; font-style: italic; font-size: 14px; text-transform: uppercase; }
    @keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }
    .marquee { animation: marquee 30s linear infinite; }
    .marquee-reverse { animation: marquee 30s linear infinite reverse; }

    /* Assessment */
    .checklist-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; margin-bottom: 5rem; }
    .checklist-item {
        display: flex;
        align-items: center;
        gap: 1.25rem;
        padding: 2rem;
        border-radius: 2rem;
        cursor: pointer;
        transition: all 0.5s;
    }
    .checklist-item p { color: #9ca3af; font-size: 1.1rem; }
    .checklist-item.checked { border-color: rgba(0, 255, 136, 0.5); background: rgba(0, 255, 136, 0.05); }
    .checklist-item.checked p { color: #fff; font-weight: 700; }
    .checkbox {
        flex-shrink: 0;
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border: 2px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        transition: all 0.5s;
    }
    .checklist-item.checked .checkbox { background: #00FF88; border-color: #00FF88; box-shadow: 0 0 20px rgba(0, 255, 136, 0.5); }
    .check-mark { color: #000; }
    .check-dot { width: 6px; height: 6px; border-radius: 50%; background: rgba(255, 255, 255, 0.1); }
    .study-plan { position: relative; overflow: hidden; padding: 3rem; border-radius: 3rem; text-align: center; }
    .study-plan-watermark { position: absolute; top: 1rem; right: 2rem; font-size: 10rem; opacity: 0.05; color: #00FF88; }
    .study-plan-label { color: #9ca3af; font-family: monospace; letter-spacing: 0.2em; text-transform: uppercase; }
    .study-plan h3 { font-size: clamp(1.5rem, 4vw, 3rem); font-weight: 900; font-style: italic; text-transform: uppercase; margin: 1rem 0 2.5rem; }
    .benefit-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.25rem;
        max-width: 48rem;
        margin: 0 auto 3rem;
        text-align: left;
    }
    .benefit { display: flex; gap: 1rem; align-items: flex-start; padding: 1rem; border-radius: 1rem; }
    .benefit p { color: #d1d5db; }
    .benefit-check { color: #00FF88; }

    /* Journey */
    .journey { background: rgba(255, 255, 255, 0.01); }
    .phase-row { display: flex; flex-wrap: wrap; align-items: stretch; justify-content: center; }
    .phase {
        flex: 1 1 280px;
        padding: 3rem;
        border-radius: 2rem;
        border-color: rgba(0, 255, 136, 0.1);
        background: linear-gradient(to bottom, rgba(0, 255, 136, 0.05), transparent);
    }
    .phase-head { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 2.5rem; }
    .phase-icon {
        width: 4rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 1rem;
        background: #00FF88;
        font-size: 1.6rem;
        box-shadow: 0 0 15px rgba(0, 255, 136, 0.3);
    }
    .phase-step { color: rgba(0, 255, 136, 0.6); font-family: monospace; font-size: 0.65rem; letter-spacing: 0.4em; text-transform: uppercase; }
    .phase h4 { font-size: 1.9rem; font-weight: 900; margin-bottom: 1.25rem; }
    .phase p { color: #9ca3af; margin-bottom: 2.5rem; }
    .phase-bar { height: 4px; border-radius: 999px; background: rgba(0, 255, 136, 0.1); overflow: hidden; }
    .phase-bar-fill { height: 100%; background: rgba(0, 255, 136, 0.4); }
    .phase-connector { display: flex; align-items: center; justify-content: center; margin: 0 -1rem; z-index: 30; }
    .phase-connector span {
        width: 2rem;
        height: 2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border: 1px solid rgba(0, 255, 136, 0.4);
        border-radius: 50%;
        background: #020202;
        color: #00FF88;
    }

    /* Carousel */
    .carousel { position: relative; display: flex; flex-direction: column; align-items: center; width: 100%; }
    .carousel-stage {
        position: relative;
        width: 100%;
        max-width: 56rem;
        height: clamp(400px, 60vw, 600px);
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .carousel-slides { position: absolute; inset: 0; }
    .slide {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        cursor: grab;
        touch-action: pan-y;
        animation-duration: var(--slide-ms);
        animation-timing-function: cubic-bezier(0.2, 0.8, 0.2, 1);
        transition: translate var(--slide-ms) cubic-bezier(0.2, 0.8, 0.2, 1);
    }
    .slide.active { z-index: 1; }
    .slide.dragging { cursor: grabbing; transition: none; }
    .slide.outgoing { z-index: 0; pointer-events: none; animation-fill-mode: forwards; }
    .slide-frame { height: 100%; padding: 0.5rem; border-radius: 2.5rem; border-color: rgba(0, 255, 136, 0.2); overflow: hidden; }
    .slide-frame img { width: 100%; height: 100%; object-fit: contain; border-radius: 2rem; user-select: none; }
    @keyframes enterFromRight { from { transform: translateX(1000px) scale(0.8); opacity: 0; } to { transform: none; opacity: 1; } }
    @keyframes enterFromLeft { from { transform: translateX(-1000px) scale(0.8); opacity: 0; } to { transform: none; opacity: 1; } }
    @keyframes exitToLeft {
        from { transform: translateX(var(--drag-from, 0px)); opacity: 1; }
        to { transform: translateX(-1000px) scale(0.8); opacity: 0; }
    }
    @keyframes exitToRight {
        from { transform: translateX(var(--drag-from, 0px)); opacity: 1; }
        to { transform: translateX(1000px) scale(0.8); opacity: 0; }
    }
    .slide.enter-from-right { animation-name: enterFromRight; }
    .slide.enter-from-left { animation-name: enterFromLeft; }
    .slide.exit-to-left { animation-name: exitToLeft; }
    .slide.exit-to-right { animation-name: exitToRight; }
    .carousel-arrow {
        position: absolute;
        z-index: 10;
        padding: 0.5rem 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 999px;
        background: rgba(255, 255, 255, 0.03);
        color: #00FF88;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .carousel-arrow:hover { border-color: rgba(0, 255, 136, 0.4); background: rgba(0, 255, 136, 0.05); }
    .carousel-arrow.prev { left: 1rem; }
    .carousel-arrow.next { right: 1rem; }
    .carousel-dots { display: flex; gap: 0.75rem; margin-top: 2.5rem; }
    .dot {
        width: 0.75rem;
        height: 6px;
        padding: 0;
        border: none;
        border-radius: 999px;
        background: rgba(255, 255, 255, 0.2);
        cursor: pointer;
        transition: all 0.5s;
    }
    .dot:hover { background: rgba(255, 255, 255, 0.4); }
    .dot.active { width: 2rem; background: #00FF88; }
    .carousel-counter { margin-top: 1rem; text-align: center; color: #6b7280; font-family: monospace; letter-spacing: 0.3em; }
    .social-proof {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        width: fit-content;
        margin: 5rem auto 0;
        padding: 1rem 2rem;
        border-radius: 1.5rem;
    }
    .avatars { display: flex; }
    .avatars img { width: 2.5rem; height: 2.5rem; margin-left: -0.75rem; border: 2px solid #020202; border-radius: 50%; }
    .social-proof p { color: #9ca3af; }
    .social-proof strong { color: #fff; }
    .rating { display: flex; align-items: center; gap: 0.25rem; margin-top: 0.25rem; }
    .star { color: #00FF88; font-size: 0.75rem; }
    .rating-text { margin-left: 0.5rem; color: #00FF88; font-size: 0.65rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; }

    /* Features */
    .feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; }
    .feature-card {
        position: relative;
        overflow: hidden;
        padding: 2rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 1.5rem;
        background: #080808;
        transition: border-color 0.5s;
    }
    .feature-card:hover { border-color: rgba(255, 255, 255, 0.1); }
    .feature-glow {
        position: absolute;
        inset: 0;
        opacity: 0;
        pointer-events: none;
        background: radial-gradient(circle at top right, var(--accent), transparent);
        transition: opacity 0.5s;
    }
    .feature-card:hover .feature-glow { opacity: 0.1; }
    .feature-head { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 2rem; }
    .feature-icon { padding: 1rem; border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 1rem; background: rgba(255, 255, 255, 0.05); font-size: 2rem; color: var(--accent); }
    .feature-tag {
        padding: 0.25rem 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 999px;
        background: rgba(255, 255, 255, 0.05);
        color: #9ca3af;
        font-family: monospace;
        font-size: 0.6rem;
        font-weight: 700;
        letter-spacing: 0.2em;
    }
    .feature-card h4 { font-size: 1.5rem; font-weight: 900; text-transform: uppercase; margin-bottom: 1rem; color: #e5e7eb; }
    .feature-card p { color: #6b7280; }
    .bonus-pulse {
        position: absolute;
        top: 1rem;
        right: 1rem;
        width: 6px;
        height: 6px;
        border-radius: 50%;
        background: var(--accent);
        box-shadow: 0 0 10px var(--accent);
        animation: pulse 2s infinite;
    }
    @keyframes pulse { 50% { opacity: 0.3; } }

    /* Offer */
    .offer-frame { position: relative; max-width: 56rem; margin: 0 auto; }
    .corner { position: absolute; width: 5rem; height: 5rem; }
    .corner.top-left { top: -2.5rem; left: -2.5rem; border-top: 2px solid rgba(0, 255, 136, 0.3); border-left: 2px solid rgba(0, 255, 136, 0.3); border-top-left-radius: 1.5rem; }
    .corner.bottom-right { bottom: -2.5rem; right: -2.5rem; border-bottom: 2px solid rgba(0, 209, 255, 0.3); border-right: 2px solid rgba(0, 209, 255, 0.3); border-bottom-right-radius: 1.5rem; }
    .offer-card { padding: 4px; border-radius: 4rem; }
    .offer-inner { padding: 5rem 2rem; border-radius: 3.9rem; background: rgba(5, 5, 5, 0.9); text-align: center; }
    .offer-badge {
        display: inline-block;
        margin-bottom: 3rem;
        padding: 0.5rem 1.5rem;
        border: 1px solid rgba(0, 255, 136, 0.2);
        border-radius: 999px;
        color: #00FF88;
        font-family: monospace;
        font-size: 0.65rem;
        letter-spacing: 0.4em;
        text-transform: uppercase;
    }
    .offer-inner h3 { font-size: clamp(1.9rem, 5vw, 3.75rem); font-weight: 900; margin-bottom: 4rem; }
    .offer-items {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.25rem 3rem;
        max-width: 42rem;
        margin: 0 auto 5rem;
        text-align: left;
    }
    .offer-item { display: flex; gap: 0.75rem; align-items: center; color: #9ca3af; }
    .price { display: flex; flex-direction: column; align-items: center; margin-bottom: 4rem; }
    .price-original { color: #6b7280; font-weight: 700; text-decoration: line-through; margin-bottom: 0.5rem; }
    .price-current { font-size: clamp(4rem, 12vw, 8rem); font-weight: 900; line-height: 1; }
    .price-installments { margin-top: 1rem; color: rgba(255, 255, 255, 0.4); font-family: monospace; font-size: 0.75rem; letter-spacing: 0.3em; text-transform: uppercase; }

    /* Guarantee */
    .guarantee-card {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        gap: 4rem;
        padding: 5rem;
        border-radius: 4rem;
        border-color: rgba(0, 255, 136, 0.2);
        background: linear-gradient(135deg, rgba(0, 255, 136, 0.05), transparent);
    }
    .seal { position: relative; }
    .seal-ring { width: 16rem; height: 16rem; display: flex; align-items: center; justify-content: center; border: 1px solid rgba(0, 255, 136, 0.3); border-radius: 50%; }
    .seal-core {
        width: 10rem;
        height: 10rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        background: linear-gradient(45deg, #00FF88, #00D1FF);
        font-size: 4rem;
        box-shadow: 0 0 50px rgba(0, 255, 136, 0.3);
    }
    .seal-days {
        position: absolute;
        right: -0.5rem;
        bottom: -0.5rem;
        padding: 0.5rem 1rem;
        border: 2px solid #00FF88;
        border-radius: 0.75rem;
        background: #020202;
        color: #00FF88;
        font-size: 1.25rem;
        font-weight: 900;
        transform: rotate(12deg);
    }
    .guarantee-copy { flex: 1 1 320px; }
    .guarantee-copy h2 { font-size: clamp(1.9rem, 5vw, 3.75rem); font-weight: 900; text-transform: uppercase; margin-bottom: 1.5rem; }
    .guarantee-copy .accent { font-style: italic; }
    .guarantee-copy p { color: #9ca3af; font-size: 1.25rem; margin-bottom: 2rem; }
    .guarantee-note { color: #d1d5db; font-family: monospace; font-size: 0.65rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; }

    /* FAQ */
    .faq-container { max-width: 48rem; margin: 0 auto; }
    .faq-heading { display: flex; align-items: center; justify-content: center; gap: 0.5rem; margin-bottom: 3rem; }
    .faq-heading-icon { color: #00D1FF; }
    .faq-heading h2 { font-size: 1.9rem; font-weight: 900; text-transform: uppercase; }
    .faq-item {
        margin-bottom: 1rem;
        overflow: hidden;
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.03);
    }
    .faq-item:hover { border-color: rgba(255, 255, 255, 0.1); }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.5rem;
        border: none;
        background: none;
        color: #e5e7eb;
        font-size: 1.1rem;
        font-weight: 700;
        text-align: left;
        cursor: pointer;
    }
    .faq-item.open .question-text { color: #00FF88; }
    .toggle-icon { transition: transform 0.3s; color: #6b7280; }
    .faq-item.open .toggle-icon { transform: rotate(180deg); color: #00FF88; }
    .faq-answer { padding: 0 1.5rem 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.05); animation: fadeInUp 0.3s ease-in-out both; }
    .faq-answer p { color: #9ca3af; padding-top: 1rem; }

    /* Footer */
    .site-footer {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        gap: 2rem;
        padding: 5rem 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        background: #000;
    }
    .footer-brand { display: flex; align-items: center; gap: 0.75rem; }
    .footer-logo {
        width: 2rem;
        height: 2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 0.5rem;
        background: linear-gradient(45deg, #00FF88, #00D1FF);
        color: #020202;
        font-weight: 900;
    }
    .footer-brand p, .footer-copy { color: #6b7280; font-family: monospace; font-size: 0.65rem; letter-spacing: 0.2em; text-transform: uppercase; }
    .footer-dots { display: flex; gap: 1rem; }
    .pulse { width: 6px; height: 6px; border-radius: 50%; animation: pulse 2s infinite; }
    .pulse.green { background: #00FF88; }
    .pulse.blue { background: #00D1FF; animation-delay: 75ms; }

    @media (max-width: 768px) {
        section { padding: 4rem 1.5rem; }
        .carousel-arrow { display: none; }
        .phase-connector { width: 100%; margin: -1rem 0; transform: rotate(90deg); }
        .guarantee-card { padding: 2rem; gap: 2.5rem; justify-content: center; text-align: center; }
        .seal-ring { width: 10rem; height: 10rem; }
        .seal-core { width: 7rem; height: 7rem; font-size: 3rem; }
        .cell { width: 3rem; height: 3rem; }
        .offer-inner { padding: 2.5rem 1.25rem; }
    }
    @media (min-width: 769px) {
        .cell { width: 4rem; height: 4rem; }
    }
"#;
