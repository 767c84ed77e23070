// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus) ; Backspace natif du TextEdit suffit
//   (l’entrée n’a que des caractères simples, pas de tokens multi-caractères)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)
// - Enter suffit (clavier PC + “Enter” virtuel mobile selon navigateur)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Arith");
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(6.0);

        self.ui_resultat(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 7/2, 2**0.5")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / C / DEL / =), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements “globaux” quand l’utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        // Ligne résultat : lecture seule, monospace, rouge si erreur.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                if self.erreur {
                    ui.colored_label(
                        ui.visuals().error_fg_color,
                        egui::RichText::new(self.affichage.as_str()).monospace(),
                    );
                } else {
                    ui.monospace(self.affichage.as_str());
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_insert(ui, "/");
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "*");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "-");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_egal(ui);
                self.bouton_insert(ui, "+");
                ui.end_row();

                self.bouton_action(ui, "C", "Tout effacer", Action::ClearEntree);
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                self.bouton_insert(ui, "(");
                self.bouton_insert(ui, ")");
                ui.end_row();

                self.bouton_insert(ui, "%");
                self.bouton_insert(ui, "**");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(texte));
        if resp.clicked() {
            self.saisir(texte);
        }
    }

    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new("="));
        if resp.clicked() {
            self.eval_via_noyau();
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 36.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::Backspace => self.retour_arriere(),
            }
        }
    }

    /// Évalue l’expression via le noyau, puis dépose le résultat (ou l’erreur) dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            // entrée vide : rien à évaluer, rien à signaler
            self.focus_entree = true;
            return;
        }

        match crate::noyau::evaluer(s) {
            Ok(n) => self.deposer_resultat(crate::noyau::format_nombre(n)),
            Err(_) => self.deposer_erreur(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    Backspace,
}
