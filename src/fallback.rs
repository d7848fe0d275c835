//! Deterministic, keyword-driven architecture generator.
//!
//! Used both as the failure fallback for the generation pipeline and as a
//! deterministic baseline for tests: the same goal string always produces the
//! same graph. The goal is classified into a keyword family and expanded from
//! a fixed template; every template yields a non-empty, weakly connected
//! architecture for arbitrary input text.

use crate::model::{
    Architecture, ArchitectureMetadata, Screen, ScreenType, Transition, TransitionTrigger,
    derive_name, now_ms,
};

/// Keyword family a goal string is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalFamily {
    Tasks,
    Social,
    Commerce,
    Generic,
}

const TASK_KEYWORDS: &[&str] = &["todo", "task", "kanban", "checklist", "habit", "productivity"];
const SOCIAL_KEYWORDS: &[&str] = &[
    "social", "chat", "friend", "post", "feed", "follow", "message", "community",
];
const COMMERCE_KEYWORDS: &[&str] = &[
    "shop",
    "store",
    "commerce",
    "cart",
    "marketplace",
    "product",
    "order",
    "checkout",
];
const AUTH_KEYWORDS: &[&str] = &["login", "log in", "auth", "account", "sign up", "sign in", "user"];

/// Classifies a goal by keyword families, first match in family order wins.
pub fn classify_goal(goal: &str) -> GoalFamily {
    let lower = goal.to_ascii_lowercase();
    let hit = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));
    if hit(TASK_KEYWORDS) {
        GoalFamily::Tasks
    } else if hit(SOCIAL_KEYWORDS) {
        GoalFamily::Social
    } else if hit(COMMERCE_KEYWORDS) {
        GoalFamily::Commerce
    } else {
        GoalFamily::Generic
    }
}

/// The deterministic, service-independent architecture generator.
pub struct FallbackGenerator;

impl FallbackGenerator {
    /// Generates an architecture for `goal`, stamped with the current time.
    pub fn generate(goal: &str) -> Architecture {
        Self::generate_at(goal, now_ms())
    }

    /// Pure form of [`generate`](Self::generate): the timestamp is supplied by
    /// the caller, so equal inputs yield identical architectures.
    pub fn generate_at(goal: &str, now: u64) -> Architecture {
        let family = classify_goal(goal);
        let lower = goal.to_ascii_lowercase();
        let wants_auth = matches!(family, GoalFamily::Social | GoalFamily::Commerce)
            || AUTH_KEYWORDS.iter().any(|k| lower.contains(k));

        let mut template = Template::default();
        let id = match family {
            GoalFamily::Tasks => {
                build_tasks(&mut template, wants_auth);
                "tasks_app"
            }
            GoalFamily::Social => {
                build_social(&mut template);
                "social_app"
            }
            GoalFamily::Commerce => {
                build_commerce(&mut template);
                "commerce_app"
            }
            GoalFamily::Generic => {
                build_generic(&mut template, wants_auth);
                "generic_app"
            }
        };

        let screen_count = template.screens.len();
        let transition_count = template.transitions.len();
        Architecture {
            id: id.to_string(),
            name: derive_name(goal),
            description: goal.to_string(),
            screens: template.screens,
            transitions: template.transitions,
            metadata: ArchitectureMetadata::stamp(screen_count, transition_count, now),
        }
    }
}

/// Accumulates screens and transitions with sequential transition ids.
#[derive(Default)]
struct Template {
    screens: Vec<Screen>,
    transitions: Vec<Transition>,
}

impl Template {
    fn screen(
        &mut self,
        id: &str,
        name: &str,
        screen_type: ScreenType,
        description: &str,
        components: &[&str],
        requires_auth: bool,
    ) {
        self.screens.push(
            Screen::new(id, name, screen_type)
                .with_description(description)
                .with_components(components.iter().copied())
                .with_auth(requires_auth),
        );
    }

    fn link(&mut self, from: &str, to: &str, trigger: TransitionTrigger, description: &str) {
        let id = format!("t{}", self.transitions.len() + 1);
        self.transitions
            .push(Transition::new(id, from, to, trigger).with_description(description));
    }

    fn link_if(
        &mut self,
        from: &str,
        to: &str,
        trigger: TransitionTrigger,
        condition: &str,
        description: &str,
    ) {
        let id = format!("t{}", self.transitions.len() + 1);
        self.transitions.push(
            Transition::new(id, from, to, trigger)
                .with_condition(condition)
                .with_description(description),
        );
    }

    /// Shared auth flow: login -> onboarding -> `hub`, with signup, a
    /// returning-user skip straight into `hub`, and a failure edge into the
    /// error screen. Screens `onboarding`, `error`, and `hub` must be
    /// declared by the caller; the launch edge into `login` is the caller's.
    fn auth_core(&mut self, hub: &str) {
        self.screen(
            "login",
            "Log In",
            ScreenType::Login,
            "Email and password sign-in",
            &["EmailField", "PasswordField", "SubmitButton"],
            false,
        );
        self.screen(
            "signup",
            "Sign Up",
            ScreenType::Signup,
            "New account registration",
            &["EmailField", "PasswordField", "ConfirmField", "SubmitButton"],
            false,
        );
        self.link("login", "signup", TransitionTrigger::UserAction, "Create account");
        self.link(
            "login",
            "onboarding",
            TransitionTrigger::ApiSuccess,
            "First sign-in",
        );
        self.link(
            "signup",
            "onboarding",
            TransitionTrigger::ApiSuccess,
            "Account created",
        );
        self.link("login", "error", TransitionTrigger::ApiError, "Login failed");
        self.link_if(
            "login",
            hub,
            TransitionTrigger::Condition,
            "returning user",
            "Skip onboarding",
        );
        self.link("onboarding", hub, TransitionTrigger::UserAction, "Get started");
    }

    fn error_pair(&mut self) {
        self.screen(
            "error",
            "Something Went Wrong",
            ScreenType::Error,
            "Generic failure state with retry",
            &["ErrorMessage", "RetryButton"],
            false,
        );
        self.screen(
            "empty_state",
            "Nothing Here Yet",
            ScreenType::EmptyState,
            "Shown when the primary list is empty",
            &["Illustration", "CallToAction"],
            false,
        );
    }
}

fn build_tasks(t: &mut Template, wants_auth: bool) {
    t.screen(
        "splash",
        "Splash",
        ScreenType::Splash,
        "Branded launch screen",
        &["Logo"],
        false,
    );
    t.screen(
        "onboarding",
        "Onboarding",
        ScreenType::Onboarding,
        "Short feature walkthrough",
        &["Carousel", "SkipButton"],
        false,
    );
    t.screen(
        "dashboard",
        "Dashboard",
        ScreenType::Dashboard,
        "Overview of open and completed tasks",
        &["SummaryCards", "NavigationBar"],
        wants_auth,
    );
    t.screen(
        "task_list",
        "Task List",
        ScreenType::List,
        "All tasks, filterable",
        &["SearchBar", "TaskList"],
        wants_auth,
    );
    t.screen(
        "task_detail",
        "Task Detail",
        ScreenType::Detail,
        "Single task with subtasks and notes",
        &["TitleHeader", "SubtaskList", "NotesSection"],
        wants_auth,
    );
    t.screen(
        "task_form",
        "Task Form",
        ScreenType::Form,
        "Create or edit a task",
        &["TitleField", "DueDatePicker", "SaveButton"],
        wants_auth,
    );
    t.error_pair();

    if wants_auth {
        t.link("splash", "login", TransitionTrigger::Timer, "App loaded");
        t.auth_core("dashboard");
    } else {
        t.link("splash", "onboarding", TransitionTrigger::Timer, "App loaded");
        t.link("onboarding", "dashboard", TransitionTrigger::UserAction, "Get started");
    }
    t.link("dashboard", "task_list", TransitionTrigger::Navigation, "Open tasks");
    t.link("task_list", "task_detail", TransitionTrigger::UserAction, "View task");
    t.link("task_list", "task_form", TransitionTrigger::UserAction, "Add task");
    t.link("task_form", "task_list", TransitionTrigger::ApiSuccess, "Task saved");
    t.link("task_form", "error", TransitionTrigger::ApiError, "Save failed");
    t.link_if(
        "task_list",
        "empty_state",
        TransitionTrigger::Condition,
        "task list is empty",
        "No tasks yet",
    );
}

fn build_social(t: &mut Template) {
    t.screen(
        "splash",
        "Splash",
        ScreenType::Splash,
        "Branded launch screen",
        &["Logo"],
        false,
    );
    t.screen(
        "onboarding",
        "Onboarding",
        ScreenType::Onboarding,
        "Short feature walkthrough",
        &["Carousel", "SkipButton"],
        false,
    );
    t.screen(
        "feed",
        "Feed",
        ScreenType::Feed,
        "Chronological posts from followed accounts",
        &["PostList", "ComposeButton"],
        true,
    );
    t.screen(
        "post_detail",
        "Post Detail",
        ScreenType::Detail,
        "Single post with comments",
        &["PostBody", "CommentList", "ReplyField"],
        true,
    );
    t.screen(
        "compose_post",
        "Compose Post",
        ScreenType::Form,
        "Write and publish a post",
        &["TextArea", "AttachButton", "PublishButton"],
        true,
    );
    t.screen(
        "chat",
        "Chat",
        ScreenType::Chat,
        "Direct messages",
        &["ConversationList", "MessageInput"],
        true,
    );
    t.screen(
        "profile",
        "Profile",
        ScreenType::Profile,
        "Own profile and follower counts",
        &["Avatar", "StatsRow", "PostGrid"],
        true,
    );
    t.error_pair();

    t.link("splash", "login", TransitionTrigger::Timer, "App loaded");
    t.auth_core("feed");
    t.link("feed", "post_detail", TransitionTrigger::UserAction, "Open post");
    t.link("feed", "compose_post", TransitionTrigger::UserAction, "New post");
    t.link("compose_post", "feed", TransitionTrigger::ApiSuccess, "Post published");
    t.link("compose_post", "error", TransitionTrigger::ApiError, "Publish failed");
    t.link("feed", "chat", TransitionTrigger::Navigation, "Open messages");
    t.link("feed", "profile", TransitionTrigger::Navigation, "Open profile");
    t.link_if(
        "feed",
        "empty_state",
        TransitionTrigger::Condition,
        "feed is empty",
        "Nothing to show",
    );
}

fn build_commerce(t: &mut Template) {
    t.screen(
        "splash",
        "Splash",
        ScreenType::Splash,
        "Branded launch screen",
        &["Logo"],
        false,
    );
    t.screen(
        "onboarding",
        "Onboarding",
        ScreenType::Onboarding,
        "Short feature walkthrough",
        &["Carousel", "SkipButton"],
        false,
    );
    t.screen(
        "home",
        "Home",
        ScreenType::Home,
        "Featured products and categories",
        &["HeroBanner", "CategoryGrid"],
        true,
    );
    t.screen(
        "product_list",
        "Product List",
        ScreenType::ProductList,
        "Browsable catalog",
        &["SearchBar", "ProductGrid", "FilterButton"],
        true,
    );
    t.screen(
        "product_detail",
        "Product Detail",
        ScreenType::ProductDetail,
        "Product photos, price, and reviews",
        &["ImageCarousel", "PriceTag", "AddToCartButton"],
        true,
    );
    t.screen(
        "cart",
        "Cart",
        ScreenType::Cart,
        "Items staged for purchase",
        &["LineItemList", "TotalRow", "CheckoutButton"],
        true,
    );
    t.screen(
        "checkout",
        "Checkout",
        ScreenType::Checkout,
        "Shipping and payment",
        &["AddressForm", "PaymentForm", "PlaceOrderButton"],
        true,
    );
    t.error_pair();

    t.link("splash", "login", TransitionTrigger::Timer, "App loaded");
    t.auth_core("home");
    t.link("home", "product_list", TransitionTrigger::Navigation, "Browse catalog");
    t.link(
        "product_list",
        "product_detail",
        TransitionTrigger::UserAction,
        "View product",
    );
    t.link("product_detail", "cart", TransitionTrigger::UserAction, "Add to cart");
    t.link("cart", "checkout", TransitionTrigger::UserAction, "Check out");
    t.link("checkout", "home", TransitionTrigger::ApiSuccess, "Order placed");
    t.link("checkout", "error", TransitionTrigger::ApiError, "Payment failed");
    t.link_if(
        "product_list",
        "empty_state",
        TransitionTrigger::Condition,
        "no products match",
        "No results",
    );
}

fn build_generic(t: &mut Template, wants_auth: bool) {
    t.screen(
        "onboarding",
        "Onboarding",
        ScreenType::Onboarding,
        "Short feature walkthrough",
        &["Carousel", "SkipButton"],
        false,
    );
    t.screen(
        "home",
        "Home",
        ScreenType::Home,
        "Primary hub",
        &["NavigationBar", "ContentArea"],
        wants_auth,
    );
    t.screen(
        "item_list",
        "Item List",
        ScreenType::List,
        "Primary collection",
        &["SearchBar", "ItemList"],
        wants_auth,
    );
    t.screen(
        "item_detail",
        "Item Detail",
        ScreenType::Detail,
        "Single item view",
        &["TitleHeader", "DetailBody"],
        wants_auth,
    );
    t.screen(
        "item_form",
        "Item Form",
        ScreenType::Form,
        "Create or edit an item",
        &["TitleField", "SaveButton"],
        wants_auth,
    );
    t.error_pair();

    if wants_auth {
        t.auth_core("home");
    } else {
        t.link("onboarding", "home", TransitionTrigger::UserAction, "Get started");
    }
    t.link("home", "item_list", TransitionTrigger::Navigation, "Open items");
    t.link("item_list", "item_detail", TransitionTrigger::UserAction, "View item");
    t.link("item_list", "item_form", TransitionTrigger::UserAction, "Add item");
    t.link("item_form", "item_list", TransitionTrigger::ApiSuccess, "Item saved");
    t.link("item_form", "error", TransitionTrigger::ApiError, "Save failed");
    t.link_if(
        "item_list",
        "empty_state",
        TransitionTrigger::Condition,
        "list is empty",
        "No items yet",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_by_keyword_family() {
        assert_eq!(classify_goal("a todo app"), GoalFamily::Tasks);
        assert_eq!(classify_goal("chat with friends"), GoalFamily::Social);
        assert_eq!(classify_goal("an online store"), GoalFamily::Commerce);
        assert_eq!(classify_goal("xyzzy"), GoalFamily::Generic);
    }

    #[test]
    fn every_family_produces_a_valid_architecture() {
        for goal in ["todo list", "social feed", "shop for shoes", "plain app", ""] {
            let arch = FallbackGenerator::generate_at(goal, 0);
            assert!(!arch.screens.is_empty(), "goal {goal:?}");
            arch.validate().unwrap_or_else(|e| panic!("goal {goal:?}: {e}"));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = FallbackGenerator::generate_at("Build a todo app", 42);
        let b = FallbackGenerator::generate_at("Build a todo app", 42);
        assert_eq!(a, b);
    }
}
