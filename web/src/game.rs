use std::rc::Rc;

use crate::mint::{DEFAULT_MINT_ENDPOINT, HttpMintAdapter};
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Interval;
use slidemint_core as game;
use yew::prelude::*;

/// Delay between shuffle animation frames.
const SHUFFLE_TICK_MS: u32 = 16;

/// Walk steps taken per animation frame.
const SHUFFLE_STEPS_PER_TICK: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    ShuffleTick,
    TileClicked(game::Position),
    Mint,
    MintSettled(game::MintResolution),
    PlayAgain,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Shuffle only one step so the puzzle can be solved in one move
    #[arg(long)]
    dev: bool,

    /// Number of random slides used to scramble the board
    #[arg(long)]
    shuffles: Option<u32>,

    /// Which week's artwork the tiles are cut from
    #[arg(long, default_value_t = 1)]
    week: u32,

    /// Challenge title shown above the board
    #[arg(long, default_value = game::DEFAULT_CHALLENGE_TITLE)]
    title: String,

    /// Chain the reward is minted on, `polygon` or anything else for mumbai
    #[arg(long, default_value = "mumbai")]
    network: String,

    /// Wallet address that receives the reward
    #[arg(long)]
    recipient: Option<String>,

    /// Route that mints the reward
    #[arg(long, default_value = DEFAULT_MINT_ENDPOINT)]
    mint_endpoint: String,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl GameProps {
    fn puzzle_config(&self) -> game::PuzzleConfig {
        let base = if self.dev {
            game::PuzzleConfig::development()
        } else {
            game::PuzzleConfig::default()
        };

        game::PuzzleConfig {
            shuffle_steps: self.shuffles.unwrap_or(base.shuffle_steps),
            image_set: game::ImageSet::new(self.week),
            challenge_title: self.title.clone(),
            network: game::Network::from_name(&self.network),
        }
    }
}

/// Whether the shuffle timer should stop after this tick.
fn shuffle_finished(progress: game::Result<game::ShuffleProgress>) -> bool {
    match progress {
        Ok(game::ShuffleProgress::Stepped) => false,
        Ok(game::ShuffleProgress::Done) => true,
        Err(err @ game::GameError::WrongState { .. }) => {
            log::debug!("late shuffle tick: {}", err);
            true
        }
        Err(err) => {
            log::error!("shuffle failed: {}", err);
            true
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    position: game::Position,
    image: Option<String>,
    onclick: Callback<game::Position>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        position,
        image,
        onclick,
    } = props.clone();

    let class = classes!(
        "puzzle-item",
        format!("puzzle-item-{}", position + 1),
        image.is_none().then_some("puzzle-item-empty"),
    );
    let style = image.map(|path| format!("background-image: url({})", path));
    let onclick = Callback::from(move |_: MouseEvent| onclick.emit(position));

    html! {
        <div {class} {style} {onclick}/>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::PuzzleController,
    adapter: Rc<HttpMintAdapter>,
    recipient: String,
    shuffle_timer: Option<Interval>,
}

impl GameView {
    fn start_shuffle_timer(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.shuffle_timer = Some(Interval::new(SHUFFLE_TICK_MS, move || {
            link.send_message(Msg::ShuffleTick)
        }));
    }

    fn advance_shuffle(&mut self) {
        for _ in 0..SHUFFLE_STEPS_PER_TICK {
            if shuffle_finished(self.controller.tick_shuffle()) {
                self.shuffle_timer = None;
                break;
            }
        }
    }

    fn request_mint(&mut self, ctx: &Context<Self>) -> bool {
        if self.recipient.is_empty() {
            log::warn!("minting without a recipient address");
        }

        let Ok(ticket) = self.controller.request_mint(self.recipient.clone()) else {
            return false;
        };
        let adapter = Rc::clone(&self.adapter);
        ctx.link().send_future(async move {
            Msg::MintSettled(ticket.settle(&*adapter).await)
        });
        true
    }

    fn view_overlay(&self, ctx: &Context<Self>, view: &game::PuzzleView) -> Html {
        use game::GameState::*;

        let on_start = ctx.link().callback(|_: MouseEvent| Msg::Start);
        let on_play_again = ctx.link().callback(|_: MouseEvent| Msg::PlayAgain);
        let on_mint = ctx.link().callback(|_: MouseEvent| Msg::Mint);

        match view.state {
            StartScreen => html! {
                <div class="puzzle-overlay">
                    <button class="start-button" onclick={on_start}>{"Start Game"}</button>
                </div>
            },
            Shuffling => {
                let (taken, total) = self.controller.session().shuffle_progress().unwrap_or_default();
                html! {
                    <div class="puzzle-overlay shuffling">
                        <img src="keyp_spinner.svg" alt="" />
                        <progress value={taken.to_string()} max={total.to_string()} />
                    </div>
                }
            }
            Playing => html! {},
            Solved => html! {
                <div class="puzzle-overlay">
                    <div class="puzzle-solved-panel">
                        <h3>{"You solved the puzzle!"}</h3>
                        <button class="mint-button" onclick={on_mint}>{"Mint NFT"}</button>
                        <button class="start-button" onclick={on_play_again}>{"Play Again"}</button>
                    </div>
                    <footer>
                        <p>{format!("{} minutes", view.elapsed)}</p>
                        <p>{format!("{} moves", view.move_count)}</p>
                    </footer>
                </div>
            },
            MintingInProgress | MintSuccess | MintFailure => html! {
                <div class="minting-overlay">
                    <div class="minting-top">
                        <img src="puzzle/nft-image-sm.png" alt="a console game controller" />
                        <h3>{"We're airdropping the NFT into your wallet."}</h3>
                        <p>{"This might take a minute."}</p>
                    </div>
                    <div class="minting-result">
                        { self.view_mint_outcome(&view.mint) }
                    </div>
                    <button class="overlay-button" onclick={on_play_again}>{"Play Again"}</button>
                </div>
            },
        }
    }

    fn view_mint_outcome(&self, mint: &game::MintOutcome) -> Html {
        use game::MintOutcome::*;

        match mint {
            NotRequested => html! {},
            Pending => html! { <img src="keyp_spinner.svg" alt="" /> },
            Success { transaction_ref } => {
                let href = self.controller.config().network.explorer_tx_url(transaction_ref);
                html! {
                    <p class="mint-success">
                        {"View transaction "}
                        <a target="_blank" rel="noreferrer" {href}>{"here"}</a>
                    </p>
                }
            }
            Failure { message } => html! {
                <p class="mint-failure">{format!("There was an error {}", message)}</p>
            },
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        Self {
            controller: game::PuzzleController::new(props.puzzle_config(), seed),
            adapter: Rc::new(HttpMintAdapter::new(props.mint_endpoint.clone())),
            recipient: props.recipient.clone().unwrap_or_default(),
            shuffle_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                let started = self.controller.start(utc_now()).is_ok();
                if started {
                    self.start_shuffle_timer(ctx);
                }
                started
            }
            PlayAgain => {
                let restarted = self.controller.play_again(utc_now()).is_ok();
                if restarted {
                    self.start_shuffle_timer(ctx);
                }
                restarted
            }
            ShuffleTick => {
                self.advance_shuffle();
                true
            }
            TileClicked(position) => {
                log::trace!("tile clicked: {}", position);
                self.controller
                    .select_tile(position, utc_now())
                    .has_update()
            }
            Mint => self.request_mint(ctx),
            MintSettled(resolution) => self.controller.apply_mint(resolution).has_update(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.controller.snapshot();
        let config = self.controller.config();
        let onclick = ctx.link().callback(Msg::TileClicked);

        let tiles: Html = (0..game::CELL_COUNT as game::Position)
            .map(|position| {
                let image = config.image_set.tile_image(&view.grid, position);
                html! {
                    <TileView {position} {image} onclick={onclick.clone()}/>
                }
            })
            .collect();

        html! {
            <div class="puzzle">
                <h2>{config.challenge_title.clone()}</h2>
                <div class="puzzle-container">
                    { tiles }
                    { self.view_overlay(ctx, &view) }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        props: GameProps,
    }

    fn props(hash: &str) -> GameProps {
        Cli::try_parse_from(crate::hash_args(hash)).unwrap().props
    }

    #[test]
    fn empty_hash_gives_production_config() {
        let config = props("").puzzle_config();
        assert_eq!(config, game::PuzzleConfig::default());
    }

    #[test]
    fn dev_flag_shortens_shuffle_unless_overridden() {
        assert_eq!(props("#--dev").puzzle_config().shuffle_steps, 1);
        assert_eq!(
            props("#--dev&--shuffles=40").puzzle_config().shuffle_steps,
            40
        );
    }

    #[test]
    fn hash_selects_artwork_and_network() {
        let props = props("#--week=3&--network=polygon&--recipient=0xabc&--seed=9");
        let config = props.puzzle_config();

        assert_eq!(config.image_set, game::ImageSet::new(3));
        assert_eq!(config.network, game::Network::Polygon);
        assert_eq!(props.recipient.as_deref(), Some("0xabc"));
        assert_eq!(props.seed, Some(9));
        assert_eq!(props.mint_endpoint, DEFAULT_MINT_ENDPOINT);
    }

    #[test]
    fn shuffle_timer_stops_on_done_and_errors() {
        use game::{GameError, GameState, ShuffleProgress};

        assert!(!shuffle_finished(Ok(ShuffleProgress::Stepped)));
        assert!(shuffle_finished(Ok(ShuffleProgress::Done)));
        assert!(shuffle_finished(Err(GameError::InvariantViolation)));

        let mut controller = game::PuzzleController::new(props("#--dev").puzzle_config(), 3);
        controller.start(chrono::DateTime::UNIX_EPOCH).unwrap();
        assert!(shuffle_finished(controller.tick_shuffle()));
        assert!(matches!(
            controller.tick_shuffle(),
            Err(GameError::WrongState {
                state: GameState::Playing | GameState::Solved,
                ..
            })
        ));
        assert!(shuffle_finished(controller.tick_shuffle()));
    }
}
