use clap::{Parser, Subcommand};
use hero_image::context::RenderMode;
use hero_image::fixture::{self, Fixture};
use hero_image::hero::{HeroDeps, HeroImageViewModel};
use hero_image::{markup, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

/// Fixture argument shared by the resolving commands.
#[derive(clap::Args, Clone)]
struct FixtureArgs {
    /// Render fixture describing the component and its repository
    fixture: PathBuf,
}

#[derive(Parser)]
#[command(name = "hero-image")]
#[command(about = "Resolve hero image banners from render fixtures")]
#[command(long_about = "\
Resolve hero image banners from render fixtures

A fixture is a TOML file describing one render: the hero component's path and
properties, the repository resources it can reference, the request context
path and the render mode.

Resolution (missing data never fails the render):
  Class list:  we-HeroImage [+ width-full] [+ ratio-16by9]
  Title:       asset jcr:title → asset dc:title → none
  Src:         <context-path><component-path>.img.jpeg[/<last-modified>.jpeg]

Logging goes to stderr and is controlled with RUST_LOG (e.g. RUST_LOG=info).

Run 'hero-image gen-fixture' to print a documented fixture.")]
#[command(version = version_string())]
struct Cli {
    /// Override the fixture's render mode
    #[arg(long, value_enum, global = true)]
    mode: Option<RenderMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the class list, image src and title
    Resolve {
        #[command(flatten)]
        fixture: FixtureArgs,
        /// Print the view-model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the banner markup
    Render(FixtureArgs),
    /// Validate a fixture without resolving it
    Check(FixtureArgs),
    /// Print a stock fixture with all options documented
    GenFixture,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { fixture, json } => {
            let fixture = Fixture::load(&fixture.fixture)?;
            with_view_model(&fixture, cli.mode, |hero| {
                let view = hero.activate();
                if json {
                    println!("{}", serde_json::to_string_pretty(&view)?);
                } else {
                    output::print_resolve(&view, hero.mode());
                }
                Ok(())
            })?;
        }
        Command::Render(args) => {
            let fixture = Fixture::load(&args.fixture)?;
            with_view_model(&fixture, cli.mode, |hero| {
                println!("{}", markup::render_hero(hero).into_string());
                Ok(())
            })?;
        }
        Command::Check(args) => {
            let fixture = Fixture::load(&args.fixture)?;
            output::print_check(&fixture);
            println!("==> Fixture is valid");
        }
        Command::GenFixture => {
            print!("{}", fixture::stock_fixture_toml());
        }
    }

    Ok(())
}

/// Build the view-model for a fixture and hand it to `f`.
fn with_view_model(
    fixture: &Fixture,
    mode: Option<RenderMode>,
    f: impl FnOnce(&HeroImageViewModel<'_>) -> Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let component = fixture.component();
    let request = fixture.request();
    let repo = fixture.repository();
    let hero = HeroImageViewModel::new(HeroDeps {
        component: &component,
        resources: &repo,
        assets: &repo,
        request: &request,
        mode: mode.unwrap_or(fixture.mode),
    });
    f(&hero)
}

/// Install the stderr subscriber, filtered by `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
