/// Contrat commun des Value Objects : un objet construit est un objet valide.
/// Chaque constructeur sécurisé (`try_new`) construit puis appelle `validate`.
pub trait ValueObject: PartialEq + Clone {
    type Error: std::error::Error;

    fn validate(&self) -> Result<(), Self::Error>;
}
