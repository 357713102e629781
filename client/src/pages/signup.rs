//! Account creation screen.

use leptos::prelude::*;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="auth-card">
            <h1 class="auth-card__title">"Create your account"</h1>
            <form class="auth-form">
                <input class="auth-input" type="text" name="name" placeholder="Full name"/>
                <input class="auth-input" type="email" name="email" placeholder="you@example.com"/>
                <input class="auth-input" type="password" name="password" placeholder="Password"/>
                <button class="auth-button" type="submit">"Continue"</button>
            </form>
            <p class="auth-card__footer">
                "Already registered? "
                <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
