//! Sign-in screen.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-card">
            <h1 class="auth-card__title">"Sign in"</h1>
            <p class="auth-card__subtitle">"Welcome back to Gatehouse."</p>
            <form class="auth-form">
                <input class="auth-input" type="email" name="email" placeholder="you@example.com"/>
                <input class="auth-input" type="password" name="password" placeholder="Password"/>
                <button class="auth-button" type="submit">"Sign in"</button>
            </form>
            <p class="auth-card__footer">
                "No account yet? "
                <a href="/signup">"Create one"</a>
            </p>
        </div>
    }
}
