//! Route table. Every page is mounted under the shell; unauthenticated
//! visitors see the login page instead of the shell.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::layout::Shell;
use crate::pages::dashboard::DashboardPage;
use crate::pages::inventory::InventoryPage;
use crate::pages::kalibrasi::KalibrasiPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::overhaul::OverhaulPage;
use crate::pages::personalia::PersonaliaPage;
use crate::pages::produksi::ProduksiPage;
use crate::pages::quality_control::QualityControlPage;
use crate::pages::rekayasa::RekayasaPage;
use crate::pages::stock_production::StockProductionPage;
use crate::system::auth::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Router>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <ParentRoute path=path!("") view=Shell>
                        <Route path=path!("") view=DashboardPage />
                        <Route path=path!("StockProduction") view=StockProductionPage />
                        <Route path=path!("Produksi") view=ProduksiPage />
                        <Route path=path!("Overhaul") view=OverhaulPage />
                        <Route path=path!("Rekayasa") view=RekayasaPage />
                        <Route path=path!("Kalibrasi") view=KalibrasiPage />
                        <Route path=path!("Inventory") view=InventoryPage />
                        <Route path=path!("Personalia") view=PersonaliaPage />
                        <Route path=path!("QualityControl") view=QualityControlPage />
                    </ParentRoute>
                </Routes>
            </Show>
        </Router>
    }
}
