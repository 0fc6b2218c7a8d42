//! User-visible messages, in Brazilian Portuguese.

pub const NAME_REQUIRED: &str = "O campo é obrigatório!";
pub const NAME_TOO_SHORT: &str = "O nome deve ter no mínimo 6 caracteres!";
pub const NAME_LETTERS_ONLY: &str = "O campo deve conter apenas letras!";

pub const BIRTHDATE_REQUIRED: &str = "O nascimento é obrigatório!";
pub const BIRTHDATE_INVALID: &str = "Data inválida!";

pub const EMAIL_REQUIRED: &str = "O e-mail é obrigatório!";
pub const EMAIL_INVALID: &str = "O e-mail precisa ser válido!";

pub const PASSWORD_REQUIRED: &str = "A senha é obrigatória!";
pub const PASSWORD_WEAK: &str = "Sua senha deve conter ao menos 8 dígitos, 1 letra minúscula, 1 maiúscula, 1 número e 1 caractere especial!";

pub const PASSWORD_MISMATCH: &str = "Senhas não condizem!";

pub const GENDER_REQUIRED: &str = "Selecione um gênero";
