use serenity::async_trait;

use crate::{
    command::{context::InvocationContext, Command},
    error::{command::CommandError, AppError},
    model::module::Module,
    service::api::{dog::DogApiService, numbers::NumbersApiService},
};

pub struct Dog {
    api: DogApiService,
}

impl Dog {
    pub fn new(api: DogApiService) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Command for Dog {
    fn name(&self) -> &'static str {
        "dog"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["doggo", "woof"]
    }

    fn module(&self) -> Module {
        Module::Fun
    }

    fn summary(&self) -> &'static str {
        "Posts a random dog picture."
    }

    async fn run(&self, _ctx: &InvocationContext) -> Result<String, AppError> {
        self.api.random_image().await
    }
}

pub struct Number {
    api: NumbersApiService,
}

impl Number {
    pub fn new(api: NumbersApiService) -> Self {
        Self { api }
    }
}

/// Parses the optional number argument.
fn parse_number(arg: Option<&str>) -> Result<Option<u64>, CommandError> {
    arg.map(|raw| {
        raw.parse::<u64>()
            .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
    })
    .transpose()
}

#[async_trait]
impl Command for Number {
    fn name(&self) -> &'static str {
        "number"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["trivia"]
    }

    fn module(&self) -> Module {
        Module::Fun
    }

    fn summary(&self) -> &'static str {
        "Tells a fact about a number, or a random one."
    }

    fn usage(&self) -> &'static str {
        "[number]"
    }

    async fn run(&self, ctx: &InvocationContext) -> Result<String, AppError> {
        let number = parse_number(ctx.arg(0))?;
        self.api.trivia(number).await
    }
}
