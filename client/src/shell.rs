use crate::gateway::ApiGateway;
use crate::login;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use timeclock::{
    GuardDecision, Navigator, Role, RouteGuard, SessionResolver, TokenStore, LOGIN_PATH,
};
use tokio::io::{AsyncBufReadExt, BufReader};

//--------------------------------------------------------------------------------------------------
// Current view - the navigation side effect lands here
//--------------------------------------------------------------------------------------------------

struct CurrentView {
    path: String,
}

impl Navigator for CurrentView {
    fn go(&mut self, path: &str) {
        self.path = path.to_string();
    }
}

//--------------------------------------------------------------------------------------------------
// Interactive shell
//--------------------------------------------------------------------------------------------------

// Stands in for the browser's navigation loop: every `go` is a navigation event, the guard
// decides, and the view follows the decision.

pub struct Shell {
    store: Arc<TokenStore>,
    resolver: SessionResolver,
    gateway: ApiGateway,
    guard: RouteGuard,
    view: CurrentView,
}

impl Shell {
    pub fn new(
        store: Arc<TokenStore>,
        resolver: SessionResolver,
        gateway: ApiGateway,
        guard: RouteGuard,
    ) -> Self {
        Shell {
            store,
            resolver,
            gateway,
            guard,
            view: CurrentView {
                path: LOGIN_PATH.to_string(),
            },
        }
    }

    pub async fn run(mut self) -> Result<()> {
        println!("timeclock client - type 'help' for commands");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{} > ", self.view.path);
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let words: Vec<&str> = line.split_whitespace().collect();

            match words.as_slice() {
                [] => {}
                ["help"] => print_help(),
                ["login", email, password, rest @ ..] => {
                    let remember = rest.contains(&"--remember");
                    self.login(email, password, remember).await;
                }
                ["logout"] => {
                    login::logout(&self.store);
                    self.view.go(LOGIN_PATH);
                }
                ["go", path] => self.navigate(path),
                ["whoami"] => self.whoami(),
                ["fetch", path] => self.fetch(path).await,
                ["quit"] | ["exit"] => break,
                _ => println!("unrecognised command - type 'help'"),
            }
        }

        Ok(())
    }

    async fn login(&mut self, email: &str, password: &str, remember: bool) {
        match login::login(&self.gateway, &self.store, email, password, remember).await {
            Ok(claims) => {
                println!("welcome, {} ({})", claims.display_name(), claims.role());

                let home = match claims.role() {
                    Role::Employee => "/employee/home",
                    Role::Hr | Role::Admin => "/admin/dashboard",
                };
                self.guard.enforce(home, Some(&claims), &mut self.view);
            }
            Err(err) => println!("{}", err),
        }
    }

    fn navigate(&mut self, path: &str) {
        // One resolver consult per navigation; the whole decision uses this one result
        let user = self.resolver.current_user();

        match self.guard.enforce(path, user.as_ref(), &mut self.view) {
            GuardDecision::Public | GuardDecision::Allowed => {}
            GuardDecision::Unauthenticated => println!("please sign in first"),
            GuardDecision::Forbidden => println!("you don't have access to {}", path),
        }
    }

    fn whoami(&self) {
        match self.resolver.current_user() {
            Some(user) => println!(
                "{} <{}> - {} (session expires {})",
                user.display_name(),
                user.email(),
                user.role(),
                user.expiry()
            ),
            None => println!("not signed in"),
        }
    }

    async fn fetch(&self, path: &str) {
        match self.gateway.get(path).await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => println!("{}\n{}", status, body),
                    Err(err) => println!("{} (unreadable body: {})", status, err),
                }
            }
            Err(err) => println!("request failed: {}", err),
        }
    }
}

fn print_help() {
    println!("  login <email> <password> [--remember]");
    println!("  logout");
    println!("  go <path>");
    println!("  whoami");
    println!("  fetch <api-path>");
    println!("  quit");
}

//--------------------------------------------------------------------------------------------------
