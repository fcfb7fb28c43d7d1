use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use frutinha_shared::{SpinRequest, SpinResponse};

const NUM_REELS: usize = 3;
const FILLER_PER_REEL: usize = 3;
const SPIN_DURATION_MS: u32 = 2000;

/// Everything the page shows, in one value. The controller callbacks hold
/// the only mutable handle; the view functions below are pure over this.
#[derive(Clone, PartialEq)]
struct UiState {
    reels: ReelsView,
    balance: Option<i64>,
    last_payout: Option<i64>,
    error: Option<String>,
}

#[derive(Clone, PartialEq)]
enum ReelsView {
    Empty,
    /// Filler symbols, three per reel, shown with the looping animation
    /// while the resolution timer runs.
    Spinning(Vec<Vec<String>>),
    /// The resolved line, one symbol per reel.
    Settled(Vec<String>),
}

impl UiState {
    fn initial() -> Self {
        Self {
            reels: ReelsView::Empty,
            balance: None,
            last_payout: None,
            error: None,
        }
    }
}

fn asset_path(name: &str) -> String {
    format!("images/{}.png", name.to_lowercase())
}

fn view_symbol(name: &str, spinning: bool) -> Html {
    let style = format!("background-image: url('{}')", asset_path(name));
    html! {
        <div class={classes!("symbol", spinning.then_some("spinning"))} style={style}></div>
    }
}

fn view_reel(names: &[String], spinning: bool) -> Html {
    html! {
        <div class="reel">
            { for names.iter().map(|name| view_symbol(name, spinning)) }
        </div>
    }
}

fn view_reels(reels: &ReelsView) -> Html {
    let columns: Vec<Html> = match reels {
        ReelsView::Empty => (0..NUM_REELS).map(|_| view_reel(&[], false)).collect(),
        ReelsView::Spinning(filler) => filler.iter().map(|names| view_reel(names, true)).collect(),
        ReelsView::Settled(line) => line
            .iter()
            .map(|name| view_reel(std::slice::from_ref(name), false))
            .collect(),
    };
    html! {
        <div id="reel-container">{ for columns }</div>
    }
}

fn balance_text(balance: Option<i64>) -> String {
    balance.map(|b| b.to_string()).unwrap_or_default()
}

fn payout_text(payout: Option<i64>) -> String {
    payout.map(|p| format!("Payout: {p}")).unwrap_or_default()
}

/// Cosmetic filler shown while the timer runs, drawn uniformly from the
/// response's symbol set. An empty set yields empty reels rather than a
/// crash; the resolved line still lands when the timer fires.
fn filler_reels(
    all: &[String],
    reels: usize,
    per_reel: usize,
    mut pick: impl FnMut(usize) -> usize,
) -> Vec<Vec<String>> {
    if all.is_empty() {
        return vec![Vec::new(); reels];
    }
    (0..reels)
        .map(|_| {
            (0..per_reel)
                .map(|_| all[pick(all.len()) % all.len()].clone())
                .collect()
        })
        .collect()
}

/// Uniform index in `[0, n)` from `Math.random`.
pub fn random_index(n: usize) -> usize {
    (js_sys::Math::random() * n as f64).floor() as usize
}

async fn fetch_spin(bet_size: String) -> Result<SpinResponse, String> {
    let url = format!(
        "{}/play",
        option_env!("BACKEND_URL").unwrap_or("http://127.0.0.1:8080")
    );
    let resp = reqwest::Client::new()
        .post(url)
        .json(&SpinRequest { bet_size })
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("spin rejected: {e}"))?
        .json::<SpinResponse>()
        .await
        .map_err(|e| format!("malformed response: {e}"))?;
    resp.check_reel_count(NUM_REELS)
        .map_err(|e| e.to_string())?;
    Ok(resp)
}

#[function_component(App)]
fn app() -> Html {
    let ui = use_state(UiState::initial);
    let bet_input = use_node_ref();
    // Pending resolution timer and spin generation. A fresh submit bumps the
    // generation and cancels the timer, so callbacks of a superseded spin
    // never touch the reels or the balance.
    let pending_timer = use_mut_ref(|| None::<Timeout>);
    let spin_seq = use_mut_ref(|| 0u64);

    let onsubmit = {
        let ui = ui.clone();
        let bet_input = bet_input.clone();
        let pending_timer = pending_timer.clone();
        let spin_seq = spin_seq.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = bet_input.cast::<HtmlInputElement>() else {
                return;
            };
            let bet_size = input.value();

            let seq = {
                let mut s = spin_seq.borrow_mut();
                *s += 1;
                *s
            };
            if let Some(timer) = pending_timer.borrow_mut().take() {
                timer.cancel();
            }

            let ui = ui.clone();
            let pending_timer = pending_timer.clone();
            let spin_seq = Rc::clone(&spin_seq);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = fetch_spin(bet_size).await;
                if *spin_seq.borrow() != seq {
                    return;
                }
                let resp = match outcome {
                    Ok(resp) => resp,
                    Err(message) => {
                        log::error!("spin failed: {message}");
                        ui.set(UiState {
                            error: Some(message),
                            ..(*ui).clone()
                        });
                        return;
                    }
                };

                let filler = filler_reels(&resp.all_symbols, NUM_REELS, FILLER_PER_REEL, random_index);
                ui.set(UiState {
                    reels: ReelsView::Spinning(filler),
                    error: None,
                    ..(*ui).clone()
                });

                let timer = {
                    let ui = ui.clone();
                    let spin_seq = Rc::clone(&spin_seq);
                    Timeout::new(SPIN_DURATION_MS, move || {
                        if *spin_seq.borrow() != seq {
                            return;
                        }
                        ui.set(UiState {
                            reels: ReelsView::Settled(resp.symbols_array),
                            balance: Some(resp.balance),
                            last_payout: Some(resp.payout),
                            error: None,
                        });
                    })
                };
                *pending_timer.borrow_mut() = Some(timer);
            });
        })
    };

    html! {
        <div>
            <form id="play-form" onsubmit={onsubmit}>
                <input name="bet_size" ref={bet_input} />
                <button type="submit">{ "Spin" }</button>
            </form>
            { view_reels(&ui.reels) }
            <div id="balance">{ balance_text(ui.balance) }</div>
            <div id="result">{ payout_text(ui.last_payout) }</div>
            if let Some(message) = &ui.error {
                <p id="error" class="error">{ message.clone() }</p>
            }
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_lowercased() {
        assert_eq!(asset_path("Cherry"), "images/cherry.png");
        assert_eq!(asset_path("BAR"), "images/bar.png");
        assert_eq!(asset_path("seven"), "images/seven.png");
    }

    #[test]
    fn filler_fills_every_reel_from_the_symbol_set() {
        let all = vec!["Cherry".to_string(), "Bar".to_string(), "Seven".to_string()];
        let mut counter = 0usize;
        let filler = filler_reels(&all, NUM_REELS, FILLER_PER_REEL, |n| {
            counter += 1;
            counter % n
        });
        assert_eq!(filler.len(), NUM_REELS);
        for reel in &filler {
            assert_eq!(reel.len(), FILLER_PER_REEL);
            for name in reel {
                assert!(all.contains(name));
            }
        }
    }

    #[test]
    fn empty_symbol_set_yields_empty_reels() {
        let filler = filler_reels(&[], NUM_REELS, FILLER_PER_REEL, |_| 0);
        assert_eq!(filler, vec![Vec::<String>::new(); NUM_REELS]);
    }

    #[test]
    fn display_texts_match_the_page_contract() {
        assert_eq!(balance_text(Some(90)), "90");
        assert_eq!(balance_text(None), "");
        assert_eq!(payout_text(Some(0)), "Payout: 0");
        assert_eq!(payout_text(Some(40)), "Payout: 40");
        assert_eq!(payout_text(None), "");
    }
}
